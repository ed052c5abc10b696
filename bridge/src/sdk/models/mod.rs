pub mod location;
pub mod payment_intent;
pub mod payment_method;
pub mod reader;
pub mod software_update;
pub mod terminal;

pub use location::*;
pub use payment_intent::*;
pub use payment_method::*;
pub use reader::*;
pub use software_update::*;
pub use terminal::*;
