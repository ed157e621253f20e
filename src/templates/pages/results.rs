use maud::{html, Markup};

use crate::domain::Opportunity;
use crate::templates::components::{flash, params_form, Flash, FormValues};
use crate::templates::desktop_layout;

pub struct ResultsVm {
    pub values: FormValues,
    pub banner: Flash,
    pub message: String,
    /// Already sorted by yield descending; empty on the non-success banners.
    pub rows: Vec<Opportunity>,
}

pub fn results_page(vm: &ResultsVm) -> Markup {
    let query = vm.values.query_string();

    desktop_layout(
        "Jinka ▶ Rentabilité",
        html! {
            (params_form(&vm.values))
            (flash(vm.banner, &vm.message))

            @if !vm.rows.is_empty() {
                (results_table(&vm.rows))

                div class="downloads" {
                    a href=(format!("/export?{query}")) { "📂 Télécharger CSV" }
                    a href=(format!("/export/xlsx?{query}")) { "Télécharger XLSX" }
                }
            }
        },
    )
}

pub fn results_table(rows: &[Opportunity]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Titre" }
                    th class="num" { "Prix (€)" }
                    th class="num" { "Surf (m²)" }
                    th { "CP" }
                    th class="num" { "Loyer théorique (€)" }
                    th class="num" { "Rdt brut %" }
                    th { "URL" }
                }
            }
            tbody {
                @for o in rows {
                    tr {
                        td { (o.title) }
                        td class="num" { (o.price) }
                        td class="num" { (o.surface) }
                        td { (o.zipcode) }
                        td class="num" { (o.monthly_rent.round()) }
                        td class="num" { (o.yield_pct()) }
                        td { a href=(o.url) { (o.url) } }
                    }
                }
            }
        }
    }
}
