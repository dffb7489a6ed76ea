mod panel;
mod view;

pub use panel::UploadPanel;
pub use view::UploadView;
