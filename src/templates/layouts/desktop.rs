use maud::{html, Markup, DOCTYPE};

/// Which sidebar entry is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Dashboard,
    Enquiries,
    Reports,
    Cancellations,
}

const NAV_ITEMS: [(Nav, &str, &str); 4] = [
    (Nav::Dashboard, "/dashboard", "Dashboard"),
    (Nav::Enquiries, "/enquiries", "Enquiries"),
    (Nav::Reports, "/reports", "Reports"),
    (Nav::Cancellations, "/cancellations", "Cancellations"),
];

pub fn desktop_layout(title: &str, active: Nav, notice: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Front Desk" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path d="M3 21h18" {}
                        path d="M5 21V7l7-4 7 4v14" {}
                        path d="M9 9h1M14 9h1M9 13h1M14 13h1M10 21v-4h4v4" {}
                    }
                    h3 { "Front Desk" }
                    nav {
                        ul {
                            @for (item, href, label) in NAV_ITEMS {
                                li {
                                    a href=(href) class=[(item == active).then_some("active")] { (label) }
                                }
                            }
                        }
                    }
                }
                @if let Some(notice) = notice {
                    div class="toast" role="status" { (notice) }
                }
                (content)
            }
        }
    }
}
