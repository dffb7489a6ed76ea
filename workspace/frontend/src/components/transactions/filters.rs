use common::{TransactionStatus, TransactionType};
use yew::prelude::*;
use crate::components::common::{Select, SelectOption};

#[derive(Properties, PartialEq)]
pub struct FiltersProps {
    pub type_filter: String,
    pub status_filter: String,
    pub on_type_change: Callback<String>,
    pub on_status_change: Callback<String>,
}

/// Type and status selects; the empty value means no filter.
#[function_component(Filters)]
pub fn filters(props: &FiltersProps) -> Html {
    let type_options: Vec<SelectOption> = std::iter::once(SelectOption::new("", "All types"))
        .chain(TransactionType::ALL.iter().map(|t| SelectOption::new(t.as_str(), t.as_str())))
        .collect();

    let status_options: Vec<SelectOption> = std::iter::once(SelectOption::new("", "All statuses"))
        .chain(TransactionStatus::ALL.iter().map(|s| SelectOption::new(s.as_str(), s.as_str())))
        .collect();

    html! {
        <div class="flex gap-2">
            <Select
                label="Type"
                value={props.type_filter.clone()}
                options={type_options}
                on_change={props.on_type_change.clone()}
            />
            <Select
                label="Status"
                value={props.status_filter.clone()}
                options={status_options}
                on_change={props.on_status_change.clone()}
            />
        </div>
    }
}
