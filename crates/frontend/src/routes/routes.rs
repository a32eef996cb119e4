use crate::domain::a001_use_case::ui::list::AdminPanel;
use crate::domain::a001_use_case::ui::pages::{IndustryPage, UseCasePage};
use crate::domain::a002_contact::ui::ContactPage;
use crate::layout::footer::Footer;
use crate::layout::nav::menu_data;
use crate::layout::nav::navbar::Navbar;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn HomePage() -> impl IntoView {
    let industries = menu_data::find_entry("industries")
        .map(|entry| entry.all_items())
        .unwrap_or_default();

    view! {
        <div class="page home-page">
            <section class="hero">
                <h1 class="hero__title">"Data and AI, put to work"</h1>
                <p class="hero__subtitle">
                    "Datamills helps organizations solve real problems with data engineering, machine learning and applied research."
                </p>
                <a href="/contact" class="button button--primary">"Get Started"</a>
            </section>

            <section class="home-page__industries">
                <h2>"Explore by industry"</h2>
                <div class="home-page__industry-grid">
                    {industries.iter().map(|label| {
                        let href = menu_data::item_href("industries", label);
                        view! { <a href=href class="home-page__industry-link">{*label}</a> }
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Page not found"</h1>
            <p class="page__status">"The page you are looking for does not exist."</p>
            <a href="/" class="button button--secondary">"Back to home"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main class="main">
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/industries/:slug") view=IndustryPage />
                    <Route path=path!("/case-studies/:slug") view=UseCasePage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/admin") view=AdminPanel />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
