//! Single-page home route with every marketing section.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::challenges::Challenges;
use crate::components::create::Create;
use crate::components::enquiry::Enquiry;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::official_video::OfficialVideo;
use crate::components::video_showcase::VideoShowcase;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navbar/>
        <main>
            <Hero/>
            <About/>
            <Challenges/>
            <Features/>
            <OfficialVideo/>
            <Create/>
            <Enquiry/>
        </main>
        <Footer/>
        <VideoShowcase/>
    }
}
