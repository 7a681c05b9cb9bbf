mod citation;
mod footer;
mod header;
mod resources;
mod video;

pub use self::citation::{CitationCard, Citations, CopyButton};
pub use self::footer::Footer;
pub use self::header::{Header, PageTitle};
pub use self::resources::{ResourceButton, ResourceGroupCard, Resources};
pub use self::video::VideoShowcase;
