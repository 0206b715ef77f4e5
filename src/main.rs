use mimalloc::MiMalloc;
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use quandary::{config::Config, ui};

fn main() {
    let config = Config::load();
    let exit_flag = Arc::new(AtomicBool::new(false));
    let flag = exit_flag.clone();
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
        println!("\n收到 Ctrl+C，正在退出...");
    })
    .expect("无法设置 Ctrl+C 处理程序");
    ui::run(&exit_flag, &config);
}
