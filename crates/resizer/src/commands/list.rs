use super::{render, shell};

pub fn execute() {
    let shell = shell::open_or_exit();

    if !shell.refresh() {
        eprintln!("Error: could not refresh the window list.");
        shell.close();
        std::process::exit(1);
    }

    render::print(&shell.session.render_view(&shell.profile));
    shell.close();
}
