mod args;
mod io;
mod run;

fn main() {
    if let Err(err) = run::run() {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
