pub mod codes;
pub mod output;
pub mod presenter;
pub mod render;

pub use codes::DecorativeCodes;
pub use output::{write_receipt_file, WriteMode};
pub use presenter::{ReceiptPresenter, TriggerOutcome};
pub use render::Receipt;
