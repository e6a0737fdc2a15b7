mod footer;
mod header;
mod hero;
mod registration_card;
mod sections;

pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use registration_card::RegistrationCard;
pub use sections::{Curriculum, Faq, WhyUs};
