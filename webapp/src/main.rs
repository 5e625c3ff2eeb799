use dioxus::prelude::*;
use tracing::Level;

use webapp::App;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}
