use crate::domain::a026_pos_cart::controller::{CartRow, CartTable as CartTableModel};
use leptos::prelude::*;
use thaw::*;

/// Cart lines plus the running total.
///
/// Rows are keyed by material and position, so removing a line rebuilds the
/// rows after it and every remove button carries its current index.
#[component]
pub fn CartTable(
    #[prop(into)] table: Signal<CartTableModel>,
    on_remove: Callback<usize>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let rows = move || table.with(|t| t.rows.clone());
    let total = move || table.with(|t| t.total.clone());

    view! {
        <div class="table-wrapper">
            <Table attr:id="cart-table" attr:style="width:100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Material"</TableHeaderCell>
                        <TableHeaderCell>"Qty"</TableHeaderCell>
                        <TableHeaderCell>"Price"</TableHeaderCell>
                        <TableHeaderCell>"Subtotal"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=rows
                        key=|row: &CartRow| (row.index, row.material_id.clone(), row.quantity.clone(), row.unit_price.clone())
                        children=move |row: CartRow| {
                            let index = row.index;
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{row.name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell class="text-right">
                                        <span style="font-variant-numeric:tabular-nums;">{row.quantity}</span>
                                    </TableCell>
                                    <TableCell class="text-right">
                                        <span style="font-variant-numeric:tabular-nums;">{row.unit_price}</span>
                                    </TableCell>
                                    <TableCell class="text-right">
                                        <strong style="font-variant-numeric:tabular-nums;">{row.subtotal}</strong>
                                    </TableCell>
                                    <TableCell>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            size=ButtonSize::Small
                                            disabled=disabled
                                            on_click=move |_| on_remove.run(index)
                                            attr:class="cart-remove"
                                        >
                                            "X"
                                        </Button>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
            {move || {
                table.with(|t| t.rows.is_empty()).then(|| view! {
                    <div class="cart-empty" style="padding:var(--spacing-md);color:var(--color-text-secondary);">
                        "Cart is empty"
                    </div>
                })
            }}
        </div>
        <div class="cart-total" style="display:flex;justify-content:flex-end;gap:var(--spacing-sm);padding:var(--spacing-md);font-size:var(--font-size-lg);">
            <span>"Total:"</span>
            <strong id="total" style="font-variant-numeric:tabular-nums;">{total}</strong>
        </div>
    }
}
