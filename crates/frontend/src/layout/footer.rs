use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <span class="footer__brand">"Datamills"</span>
                <div class="footer__links">
                    <a href="/contact" class="footer__link">"Contact"</a>
                    <a href="https://www.linkedin.com" class="footer__link" rel="external">"LinkedIn"</a>
                    <a href="https://github.com" class="footer__link" rel="external">"GitHub"</a>
                </div>
                <span class="footer__copyright">
                    {format!("\u{a9} {} Datamills. All rights reserved.", chrono::Utc::now().format("%Y"))}
                </span>
            </div>
        </footer>
    }
}
