use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Load failure with a retry button. Renders nothing while `error` is `None`.
#[component]
pub fn ErrorBanner(
    #[prop(into)]
    error: Signal<Option<String>>,
    on_retry: Callback<()>,
) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{message}</span>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        on_click=move |_| on_retry.run(())
                    >
                        {icon("refresh")}
                        " Retry"
                    </Button>
                </div>
            }
        })
    }
}
