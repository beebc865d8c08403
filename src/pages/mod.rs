//! Gallery pages, one per component family.

mod forms;
mod stats;
mod views;

pub use forms::Forms;
pub use stats::Stats;
pub use views::Views;
