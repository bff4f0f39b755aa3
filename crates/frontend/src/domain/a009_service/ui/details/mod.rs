use contracts::domain::a003_subcategory::aggregate::classification_label;
use contracts::domain::a009_service::aggregate::Service;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a008_product::ui::details::discount_text;
use crate::domain::a009_service::api;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::ui::badge::FlagBadge;
use crate::shared::date_utils::{format_iqd, format_opt_date};
use crate::shared::icons::icon;
use crate::shared::media::image_url;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_auth;

fn service_view(service: Service) -> impl IntoView {
    let images: Vec<String> = service
        .images
        .iter()
        .filter_map(|img| img.path.as_deref())
        .map(|path| image_url(Some(path), false))
        .collect();
    let cover = image_url(service.first_image(), false);
    let provider = service.provider.clone();

    view! {
        <div class="detail-grid">
            <div class="detail-card">
                <img class="detail-card__cover" src=cover alt=service.name.clone() />
                {(images.len() > 1).then(|| view! {
                    <div class="detail-card__gallery">
                        {images.into_iter().map(|src| view! {
                            <img class="detail-card__thumb" src=src alt="" />
                        }).collect_view()}
                    </div>
                })}
            </div>

            <div class="detail-card">
                <h4 class="detail-card__title">{service.name.clone()}</h4>
                <p class="party__meta">{service.description.clone().unwrap_or_default()}</p>
                <dl class="detail-list">
                    <dt>"Category"</dt>
                    <dd>{classification_label(service.category.as_ref(), service.sub_category.as_ref())}</dd>
                    <dt>"Price"</dt>
                    <dd>{format_iqd(service.price)}</dd>
                    {discount_text(service.discount_amount).map(|d| view! {
                        <dt>"Discount"</dt>
                        <dd>{d}</dd>
                    })}
                    <dt>"Final price"</dt>
                    <dd class="detail-list__strong">{format_iqd(service.final_price())}</dd>
                    <dt>"Commission"</dt>
                    <dd>{format!("{:.1}%", service.commission_percent())}</dd>
                    <dt>"Status"</dt>
                    <dd>
                        <FlagBadge value=service.is_approved on_label="Approved" off_label="Pending" off_tone="badge--yellow" />
                    </dd>
                    <dt>"Created"</dt>
                    <dd>{format_opt_date(service.created_at.as_deref())}</dd>
                </dl>
            </div>

            {provider.map(|p| view! {
                <div class="detail-card">
                    <h4 class="detail-card__title">"Provider"</h4>
                    <div class="party">
                        <img class="party__avatar" src=image_url(p.image_path.as_deref(), true) alt=p.name.clone() />
                        <div>
                            <p class="party__name">{p.name.clone()}</p>
                            <p class="party__meta">{format!("Phone: {}", p.phone_number)}</p>
                        </div>
                    </div>
                </div>
            })}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ServiceDetails(id: i64, on_close: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let service: RwSignal<Option<Service>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        set_error.set(None);
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::get_service(&client, id).await) {
                Ok(p) => service.set(Some(p)),
                Err(e) => set_error.set(Some(format!("Failed to load service: {}", e))),
            }
        });
    };

    load();

    view! {
        <PageFrame page_id="a009_service--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{format!("Service #{}", id)}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBanner error=error on_retry=Callback::new(move |_| load()) />
                {move || match service.get() {
                    Some(p) => service_view(p).into_any(),
                    None => view! { <div class="page__loading"><Spinner /></div> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
