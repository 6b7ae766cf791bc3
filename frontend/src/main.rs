fn main() {
    yew::Renderer::<mikrobot_web::App>::new().render();
}
