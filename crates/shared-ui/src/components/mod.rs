pub mod alert_dialog;
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form;
pub mod form_select;
pub mod input;
pub mod label;
pub mod page_header;
pub mod search_bar;
pub mod separator;
pub mod sheet;
pub mod skeleton;
pub mod textarea;
pub mod toast;

pub use alert_dialog::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use page_header::*;
pub use search_bar::*;
pub use separator::*;
pub use sheet::*;
pub use skeleton::*;
pub use textarea::*;
pub use toast::*;
