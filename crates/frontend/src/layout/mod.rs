pub mod center;
pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;

use center::Center;
use left::{Left, Sidebar};
use top_header::TopHeader;

/// Authenticated layout: top bar, collapsible sidebar and the content zone
/// holding `children`.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +---------+--------------------+
/// | Sidebar |  active section    |
/// +---------+--------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Left>
                    <Sidebar />
                </Left>
                <Center>{children()}</Center>
            </div>
        </div>
    }
}
