mod features;
mod final_cta;
mod footer;
mod testimonials;
mod vision;

pub use features::FeaturesSection;
pub use final_cta::FinalCtaSection;
pub use footer::FooterSection;
pub use testimonials::TestimonialsSection;
pub use vision::VisionSection;
