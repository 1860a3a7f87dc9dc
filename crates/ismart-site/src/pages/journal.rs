//! Journal page: featured story plus a category-filtered article grid

use crate::components::*;
use ismart_core::catalog::{featured_article, Article, ARTICLES, JOURNAL_CATEGORIES};
use ismart_core::{CategoryFilter, Selection};
use leptos::*;

fn tab_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-full bg-emerald-600 text-white text-sm font-medium"
    } else {
        "px-4 py-2 rounded-full bg-gray-100 text-gray-700 text-sm font-medium hover:bg-gray-200"
    }
}

#[component]
pub fn JournalPage() -> impl IntoView {
    let filter = create_rw_signal(CategoryFilter::new(ARTICLES.as_slice()));

    let tabs = std::iter::once(("All", Selection::All))
        .chain(JOURNAL_CATEGORIES.iter().map(|category| (*category, Selection::from(*category))))
        .map(|(label, selection)| {
            let target = selection.clone();
            let active = move || filter.with(|filter| *filter.active() == target);
            view! {
                <button
                    class=move || tab_class(active())
                    on:click=move |_| filter.update(|filter| filter.set_category(selection.clone()))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let articles = move || filter.with(|filter| filter.filtered());
    let is_empty = move || filter.with(|filter| filter.is_empty_result());

    view! {
        <div>
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-16">
                <div class="container mx-auto px-4 text-center">
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">"The ISmart Journal"</h1>
                    <p class="text-xl text-gray-300">"Guides, reviews and news from the world of refurbished tech."</p>
                </div>
            </section>

            {featured_article().map(|article| view! { <FeaturedArticle article=article/> })}

            <section class="py-16 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="flex flex-wrap gap-2 mb-10">{tabs}</div>
                    <Show
                        when=move || !is_empty()
                        fallback=move || view! {
                            <EmptyState
                                message="No articles in this category yet.".to_string()
                                on_reset=move || filter.update(|filter| filter.reset())
                            />
                        }
                    >
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                            {move || {
                                articles()
                                    .into_iter()
                                    .map(|article| view! {
                                        <div id=article.slug>
                                            <ContentCard card=article.card()/>
                                            <p class="text-sm text-gray-600 mt-3 px-1">{article.excerpt}</p>
                                        </div>
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </div>
            </section>
        </div>
    }
}

#[component]
fn FeaturedArticle(article: &'static Article) -> impl IntoView {
    view! {
        <section class="py-16 bg-white">
            <div class="container mx-auto px-4">
                <div class="grid lg:grid-cols-2 gap-10 items-center">
                    <VisualBlock visual=article.visual sizing="h-72 rounded-xl"/>
                    <div>
                        <span class="text-sm font-semibold text-emerald-700 uppercase tracking-wide">
                            {format!("Featured · {}", article.category)}
                        </span>
                        <h2 class="text-3xl font-bold text-gray-900 mt-3 mb-4">{article.title}</h2>
                        <p class="text-gray-600 mb-4">{article.excerpt}</p>
                        <p class="text-sm text-gray-500">
                            {format!(
                                "{} · {} min read",
                                article.published.format("%B %-d, %Y"),
                                article.read_minutes,
                            )}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
