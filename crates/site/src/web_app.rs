use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use nexus_ui::prelude::*;

use crate::config::ShellConfig;
use crate::document::LinkRel;

#[component]
pub fn SiteApp(#[prop(optional)] config: Option<ShellConfig>) -> impl IntoView {
    provide_meta_context();
    let config = config.unwrap_or_default();

    let links = config
        .links
        .iter()
        .map(|link| match link.rel {
            LinkRel::Stylesheet => view! { <Stylesheet href=link.href.clone() /> }.into_view(),
            LinkRel::Preconnect => {
                view! { <Link rel="preconnect" href=link.href.clone() /> }.into_view()
            }
        })
        .collect_view();

    view! {
        <Html lang=config.lang.clone() />
        <Meta charset="utf-8" />
        <Meta name="viewport" content="width=device-width,initial-scale=1" />
        <Title text=config.title.clone() />
        <Meta name="description" content=config.description.clone() />
        {links}

        <Router>
            <main class="min-h-screen bg-background text-foreground">
                <Routes>
                    <Route path="" view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="flex flex-col gap-6 p-6">
            <h1 class="text-2xl font-semibold">"Auqli Nexus"</h1>
            <p class="text-sm">"Sync your Shopify catalogue with Auqli."</p>
            <div class="flex flex-wrap items-center gap-2">
                <Button attr:type="submit">"Sync products"</Button>
                <Button variant=ButtonVariant::Outline size=ButtonSize::Sm>
                    "Preview"
                </Button>
                <Button variant=ButtonVariant::Destructive class="px-6">
                    "Disconnect store"
                </Button>
                <Button
                    variant=ButtonVariant::Link
                    directive=LinkTarget::new("https://auqli.com/help").external()
                >
                    "Help center"
                </Button>
                <Button directive=RenderDirective::AsChild variant=ButtonVariant::Secondary>
                    <a href="/settings">"Settings"</a>
                </Button>
                <a
                    href="/products"
                    class=button_variants(ButtonVariant::Ghost, ButtonSize::Default, None)
                >
                    "Products"
                </a>
            </div>
        </section>
    }
}
