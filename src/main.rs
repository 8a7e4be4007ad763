mod app;
mod home;
mod scroll_tracker;
mod site_core;
mod views;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
