use contracts::domain::a003_subcategory::aggregate::classification_label;
use contracts::domain::a008_product::aggregate::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a008_product::api;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::ui::badge::FlagBadge;
use crate::shared::date_utils::{format_iqd, format_opt_date};
use crate::shared::icons::icon;
use crate::shared::media::image_url;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_auth;

/// Discount as shown to operators: `10%`, or `None` when not discounted.
pub fn discount_text(discount: Option<f64>) -> Option<String> {
    discount
        .filter(|d| *d > 0.0)
        .map(|d| format!("{}%", (d * 100.0).round()))
}

fn product_view(product: Product) -> impl IntoView {
    let images: Vec<String> = product
        .images
        .iter()
        .filter_map(|img| img.path.as_deref())
        .map(|path| image_url(Some(path), false))
        .collect();
    let cover = image_url(product.first_image(), false);
    let provider = product.provider.clone();

    view! {
        <div class="detail-grid">
            <div class="detail-card">
                <img class="detail-card__cover" src=cover alt=product.name.clone() />
                {(images.len() > 1).then(|| view! {
                    <div class="detail-card__gallery">
                        {images.into_iter().map(|src| view! {
                            <img class="detail-card__thumb" src=src alt="" />
                        }).collect_view()}
                    </div>
                })}
            </div>

            <div class="detail-card">
                <h4 class="detail-card__title">{product.name.clone()}</h4>
                <p class="party__meta">{product.description.clone().unwrap_or_default()}</p>
                <dl class="detail-list">
                    <dt>"Category"</dt>
                    <dd>{classification_label(product.category.as_ref(), product.sub_category.as_ref())}</dd>
                    <dt>"Price"</dt>
                    <dd>{format_iqd(product.price)}</dd>
                    {discount_text(product.discount_amount).map(|d| view! {
                        <dt>"Discount"</dt>
                        <dd>{d}</dd>
                    })}
                    <dt>"Final price"</dt>
                    <dd class="detail-list__strong">{format_iqd(product.final_price())}</dd>
                    <dt>"Commission"</dt>
                    <dd>{format!("{:.1}%", product.commission_percent())}</dd>
                    <dt>"Status"</dt>
                    <dd>
                        <FlagBadge value=product.is_approved on_label="Approved" off_label="Pending" off_tone="badge--yellow" />
                    </dd>
                    <dt>"Created"</dt>
                    <dd>{format_opt_date(product.created_at.as_deref())}</dd>
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
pub fn ProductDetails(id: i64, on_close: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let product: RwSignal<Option<Product>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        set_error.set(None);
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::get_product(&client, id).await) {
                Ok(p) => product.set(Some(p)),
                Err(e) => set_error.set(Some(format!("Failed to load product: {}", e))),
            }
        });
    };

    load();

    view! {
        <PageFrame page_id="a008_product--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{format!("Product #{}", id)}</h1>
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
                {move || match product.get() {
                    Some(p) => product_view(p).into_any(),
                    None => view! { <div class="page__loading"><Spinner /></div> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_text() {
        assert_eq!(discount_text(Some(0.1)).as_deref(), Some("10%"));
        assert_eq!(discount_text(Some(0.0)), None);
        assert_eq!(discount_text(None), None);
    }
}
