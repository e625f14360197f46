// Components module - the building blocks of the card
//
// The card is a fixed vertical stack, top to bottom:
// - Header: avatar, author name + role, timestamps
// - Content: the post body, one row per recognized line
// - Comment form: draft input, submit affordance, validation message
// - Comment list: the thread, with selection and delete
// - Status bar: key hints and the latest notable log entry
//
// Each component is a focused, single-responsibility module with a
// `render(f, area, ...)` function that reads App state and draws.

pub mod avatar;
pub mod comment_form;
pub mod comment_list;
pub mod content;
pub mod header;
pub mod status_bar;
pub mod toast;

pub use toast::Toast;
