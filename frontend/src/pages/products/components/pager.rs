use crate::pages::products::utils::PagerControls;
use leptos::*;

const SHORTCUT_ENABLED: &str = "bg-white text-gray-700 hover:bg-gray-50";
const SHORTCUT_DISABLED: &str = "bg-gray-100 text-gray-400";
const PAGE_CURRENT: &str = "z-10 bg-blue-600 text-white focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-blue-600";
const PAGE_OTHER: &str = "text-gray-900 ring-1 ring-inset ring-gray-300 hover:bg-gray-50 focus:outline-offset-0";

fn shortcut_class(disabled: bool) -> String {
    format!(
        "relative inline-flex items-center px-4 py-2 text-sm font-medium rounded-md {}",
        if disabled { SHORTCUT_DISABLED } else { SHORTCUT_ENABLED }
    )
}

#[component]
pub fn Pager(controls: PagerControls, #[prop(into)] on_select: Callback<u32>) -> impl IntoView {
    let previous = controls.previous;
    let next = controls.next;
    let summary = controls.summary;

    view! {
        <div class="flex items-center justify-between border-t border-gray-200 px-4 py-3 sm:px-6">
            <div class="flex flex-1 justify-between sm:hidden">
                <button
                    class={shortcut_class(previous.is_none())}
                    disabled={previous.is_none()}
                    on:click=move |_| {
                        if let Some(page) = previous {
                            on_select.call(page);
                        }
                    }
                >
                    "Previous"
                </button>
                <button
                    class={shortcut_class(next.is_none())}
                    disabled={next.is_none()}
                    on:click=move |_| {
                        if let Some(page) = next {
                            on_select.call(page);
                        }
                    }
                >
                    "Next"
                </button>
            </div>
            <div class="hidden sm:flex sm:flex-1 sm:items-center sm:justify-between">
                <div>
                    <p class="text-sm text-gray-700">
                        "Showing " <span class="font-medium">{summary.from}</span>
                        " to " <span class="font-medium">{summary.to}</span>
                        " of " <span class="font-medium">{summary.total}</span> " results"
                    </p>
                </div>
                <nav class="isolate inline-flex -space-x-px rounded-md shadow-sm" aria-label="Pagination">
                    {controls
                        .pages
                        .into_iter()
                        .map(|button| {
                            let number = button.number;
                            view! {
                                <button
                                    class={format!(
                                        "relative inline-flex items-center px-4 py-2 text-sm font-semibold {}",
                                        if button.is_current { PAGE_CURRENT } else { PAGE_OTHER },
                                    )}
                                    data-page=number
                                    aria-current={if button.is_current { "page" } else { "false" }}
                                    on:click=move |_| on_select.call(number)
                                >
                                    {number}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </div>
    }
}
