use contracts::domain::a004_provider::aggregate::{
    ProviderWithCategories, UpdateProviderCategoryStatus,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_provider::api;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::ui::badge::FlagBadge;
use crate::shared::media::image_url;
use crate::shared::modal::Modal;
use crate::system::auth::context::use_auth;

/// Provider profile, documents and per-category approval switches
#[component]
pub fn ProviderCategoriesDialog(provider_id: i64, on_close: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let data: RwSignal<Option<ProviderWithCategories>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (updating, set_updating) = signal::<Option<i64>>(None);

    let load = move || {
        set_error.set(None);
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::get_provider_with_categories(&client, provider_id).await) {
                Ok(loaded) => data.set(Some(loaded)),
                Err(e) => set_error.set(Some(format!("Failed to load provider categories: {}", e))),
            }
        });
    };

    load();

    let set_status = move |category_id: i64, approved: bool| {
        set_updating.set(Some(category_id));
        let request = UpdateProviderCategoryStatus {
            provider_id,
            category_id,
            new_status: approved,
        };
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::set_category_status(&client, &request).await) {
                Ok(()) => data.update(|d| {
                    if let Some(d) = d.as_mut() {
                        d.set_approval(category_id, approved);
                    }
                }),
                Err(e) => set_error.set(Some(format!("Failed to update category status: {}", e))),
            }
            set_updating.set(None);
        });
    };

    view! {
        <Modal title="Provider Categories" on_close=on_close class="modal--wide">
            <ErrorBanner error=error on_retry=Callback::new(move |_| load()) />

            {move || match data.get() {
                None => view! {
                    <div class="modal__loading"><Spinner /></div>
                }.into_any(),
                Some(details) => {
                    let provider = details.provider.clone();
                    let summary = format!(
                        "{} of {} categories approved",
                        details.approved_count(),
                        details.provider_categories.len()
                    );
                    view! {
                        <div class="provider-card">
                            <img
                                class="provider-card__avatar"
                                src=image_url(provider.image_path.as_deref(), true)
                                alt=provider.name.clone()
                            />
                            <div class="provider-card__info">
                                <h3>{provider.name.clone()}</h3>
                                <p>{provider.phone_number.clone()}</p>
                                {provider.email.clone().map(|email| view! { <p>{email}</p> })}
                                <FlagBadge value=provider.is_active on_label="Active" off_label="Inactive" />
                            </div>
                        </div>

                        {(!provider.documents().is_empty()).then(|| view! {
                            <h4 class="modal__section-title">"Documents"</h4>
                            <div class="document-grid">
                                {provider.documents().into_iter().map(|(caption, path)| {
                                    let url = image_url(Some(&path), false);
                                    let href = url.clone();
                                    view! {
                                        <a class="document-grid__item" href=href target="_blank" rel="noopener">
                                            <img src=url alt=caption />
                                            <span>{caption}</span>
                                        </a>
                                    }
                                }).collect_view()}
                            </div>
                        })}

                        <h4 class="modal__section-title">"Categories"</h4>
                        <p class="modal__hint">{summary}</p>
                        {if details.provider_categories.is_empty() {
                            view! { <p class="table__empty">"This provider has not applied for any category"</p> }.into_any()
                        } else {
                            view! {
                                <Table>
                                    <TableBody>
                                        {details.provider_categories.into_iter().map(|link| {
                                            let category_id = link.category.id;
                                            let approved = link.is_approved;
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout>{link.category.label()}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <FlagBadge
                                                            value=approved
                                                            on_label="Approved"
                                                            off_label="Pending"
                                                            off_tone="badge--yellow"
                                                        />
                                                    </TableCell>
                                                    <TableCell>
                                                        <Button
                                                            appearance=if approved {
                                                                ButtonAppearance::Secondary
                                                            } else {
                                                                ButtonAppearance::Primary
                                                            }
                                                            size=ButtonSize::Small
                                                            disabled=Signal::derive(move || updating.get().is_some())
                                                            on_click=move |_| set_status(category_id, !approved)
                                                        >
                                                            {move || {
                                                                if updating.get() == Some(category_id) {
                                                                    "Saving..."
                                                                } else if approved {
                                                                    "Revoke"
                                                                } else {
                                                                    "Approve"
                                                                }
                                                            }}
                                                        </Button>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        }).collect_view()}
                                    </TableBody>
                                </Table>
                            }.into_any()
                        }}
                    }.into_any()
                }
            }}
        </Modal>
    }
}
