#![deny(clippy::all)]
#![deny(missing_debug_implementations)]

mod app;
use app::App;
use search_api::create_frontend_bridge;

fn main() {
    stellation_frontend::Renderer::<App>::new()
        .bridge(create_frontend_bridge())
        .render();
}
