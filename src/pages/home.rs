use yew::prelude::*;

use crate::components::about::AboutSection;
use crate::components::alert_banner::AlertBanner;
use crate::components::blog::BlogSection;
use crate::components::chatbot::Chatbot;
use crate::components::contact::ContactSection;
use crate::components::curriculum::CurriculumSection;
use crate::components::faq::FaqSection;
use crate::components::footer::Footer;
use crate::components::hero::HeroSection;
use crate::components::scroll_to_top::ScrollToTop;
use crate::components::teachers::TeachersSection;
use crate::components::why::WhySection;

/// The enrollment banner keeps coming back on this period even after being
/// dismissed, for as long as the page stays mounted.
const BANNER_RECUR_MS: u32 = 90_000;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home">
            <HeroSection />
            <AlertBanner recur_ms={Some(BANNER_RECUR_MS)} />
            <AboutSection />
            <WhySection />
            <CurriculumSection />
            <TeachersSection />
            <BlogSection />
            <FaqSection />
            <ContactSection />
            <Chatbot />
            <ScrollToTop />
            <Footer />
        </div>
    }
}
