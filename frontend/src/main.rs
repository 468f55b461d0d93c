use pamyo_frontend::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Rendering pamyo landing page");
    yew::Renderer::<App>::new().render();
}
