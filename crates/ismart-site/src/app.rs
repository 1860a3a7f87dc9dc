//! Main application component

use crate::components::*;
use crate::pages::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/ismart-site.css"/>
        <Meta name="description" content="Certified refurbished smartphones, laptops and more, with a 12-month warranty."/>
        <Router>
            <div class="min-h-screen flex flex-col bg-white text-gray-900">
                <Header/>
                <Breadcrumbs/>
                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/about" view=AboutPage/>
                        <Route path="/help" view=HelpPage/>
                        <Route path="/contact" view=ContactPage/>
                        <Route path="/journal" view=JournalPage/>
                        <Route path="/category/:slug" view=CategoryPage/>
                        <Route path="/report" view=ReportPage/>
                        <Route path="/login" view=LoginPage/>
                        <Route path="/*any" view=NotFoundPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
