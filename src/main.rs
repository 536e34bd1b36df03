use havoc_chess::run_program;

fn main() {
    run_program();
}
