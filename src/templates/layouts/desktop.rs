use maud::{html, Markup, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 1080px; margin: 0 auto; padding: 1rem 1.5rem; color: #1c1c1c; }
header { display: flex; align-items: baseline; justify-content: space-between; border-bottom: 1px solid #ddd; padding-bottom: .75rem; margin-bottom: 1.5rem; }
header h3 { margin: 0; }
nav a { margin-left: 1rem; text-decoration: none; color: #524ed2; }
.card { background: #fafafa; border: 1px solid #e4e4e4; border-radius: 8px; padding: 1rem 1.25rem; margin-bottom: 1.25rem; }
.flash { border-radius: 8px; padding: .75rem 1rem; margin-bottom: 1.25rem; }
.flash-success { background: #ecfdf5; border: 1px solid #10b981; }
.flash-info { background: #eff6ff; border: 1px solid #3b82f6; }
.flash-warning { background: #fffbeb; border: 1px solid #f59e0b; }
.flash-error { background: #fef2f2; border: 1px solid #dc2626; }
form.params { display: grid; grid-template-columns: repeat(3, 1fr); gap: .75rem 1rem; }
form.params label { display: flex; flex-direction: column; font-size: .9rem; gap: .25rem; }
form.params input { padding: .4rem .5rem; border: 1px solid #ccc; border-radius: 6px; font-size: 1rem; }
form.params button { grid-column: 1 / -1; justify-self: start; padding: .5rem 1.25rem; font-size: 1rem; cursor: pointer; background: #524ed2; color: white; border: none; border-radius: 6px; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #e4e4e4; padding: .4rem .6rem; text-align: left; }
th { background: #f4f4f4; }
td.num, th.num { text-align: right; }
.downloads a { margin-right: 1rem; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="fr" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (maud::PreEscaped(STYLE)) }
            }
            body {
                header {
                    h3 { "📊 Jinka ▶ Rentabilité" }
                    nav {
                        a href="/" { "Accueil" }
                    }
                }
                (content)
            }
        }
    }
}
