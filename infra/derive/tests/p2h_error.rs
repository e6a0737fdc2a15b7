#[test]
fn p2h_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/p2h_error_pass.rs");
}
