use common::format::format_currency;
use common::StatementSummary;
use yew::prelude::*;
use crate::common::loading::CardSkeleton;

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub summary: StatementSummary,
    /// Total transactions matching the current query.
    pub total: u64,
    /// Renders skeletons instead of values.
    #[prop_or_default]
    pub loading: bool,
}

fn stat_card(icon: &str, title: &str, value: String, value_class: &'static str) -> Html {
    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat">
                <div class="stat-figure text-primary">
                    <i class={classes!(icon.to_string(), "text-3xl")}></i>
                </div>
                <div class="stat-title">{title.to_string()}</div>
                <div class={classes!("stat-value", value_class)}>{value}</div>
            </div>
        </div>
    }
}

#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    if props.loading {
        return html! {
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <CardSkeleton />
                <CardSkeleton />
                <CardSkeleton />
            </div>
        };
    }

    let summary = &props.summary;
    let balance_class = if summary.balance >= 0 { "text-primary" } else { "text-error" };
    let issues_class = if summary.issues > 0 { "text-warning" } else { "" };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            {stat_card("fas fa-wallet", "Current Balance", format_currency(summary.balance), balance_class)}
            {stat_card("fas fa-chart-bar", "Total Transactions", props.total.to_string(), "")}
            {stat_card("fas fa-exclamation-triangle", "Issues", summary.issues.to_string(), issues_class)}
        </div>
    }
}
