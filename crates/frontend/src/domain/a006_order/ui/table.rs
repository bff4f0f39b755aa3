use contracts::domain::a006_order::aggregate::Order;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::badge::OrderStatusBadge;
use crate::shared::date_utils::{format_iqd, format_opt_date};
use crate::shared::icons::icon;

/// Order rows; each opens the order's detail tab.
#[component]
pub fn OrdersTable(
    #[prop(into)]
    orders: Signal<Vec<Order>>,
    /// Hides the customer column (used on a customer's own page)
    #[prop(optional)]
    hide_customer: bool,
) -> impl IntoView {
    let tabs = use_app_context();

    view! {
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell min_width=70.0>"#"</TableHeaderCell>
                    {(!hide_customer).then(|| view! {
                        <TableHeaderCell min_width=160.0>"Customer"</TableHeaderCell>
                    })}
                    <TableHeaderCell min_width=160.0>"Provider"</TableHeaderCell>
                    <TableHeaderCell min_width=110.0>"Status"</TableHeaderCell>
                    <TableHeaderCell min_width=120.0>"Total"</TableHeaderCell>
                    <TableHeaderCell min_width=120.0>"Date"</TableHeaderCell>
                    <TableHeaderCell min_width=80.0>""</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                <For
                    each=move || orders.get()
                    key=|o| (o.id, o.order_status)
                    children=move |order| {
                        let id = order.id;
                        let number = format!("#{}", order.id);
                        let customer_name = order.customer_name();
                        let provider_name = order.provider_name();
                        let status = order.order_status;
                        let total = format_iqd(order.total);
                        let date = format_opt_date(order.created_at.as_deref());
                        view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>{number}</TableCellLayout>
                                </TableCell>
                                {(!hide_customer).then(|| view! {
                                    <TableCell>
                                        <TableCellLayout truncate=true>{customer_name}</TableCellLayout>
                                    </TableCell>
                                })}
                                <TableCell>
                                    <TableCellLayout truncate=true>{provider_name}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <OrderStatusBadge status=status />
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{total}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{date}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        size=ButtonSize::Small
                                        on_click=move |_| tabs.open_detail("a006_order", id)
                                    >
                                        {icon("eye")}
                                    </Button>
                                </TableCell>
                            </TableRow>
                        }
                    }
                />
            </TableBody>
        </Table>
    }
}
