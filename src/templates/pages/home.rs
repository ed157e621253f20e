// templates/pages/home.rs

use maud::{html, Markup};

use crate::templates::components::{flash, params_form, Flash, FormValues};
use crate::templates::desktop_layout;

pub fn home_page(defaults: &FormValues) -> Markup {
    desktop_layout(
        "Jinka ▶ Rentabilité",
        html! {
            (params_form(defaults))
            (flash(
                Flash::Info,
                "Remplis tes paramètres puis clique sur « Analyser maintenant ».",
            ))
        },
    )
}
