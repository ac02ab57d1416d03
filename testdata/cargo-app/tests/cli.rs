#[test]
fn runs() {
    assert!(true);
}
