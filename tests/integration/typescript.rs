//! TypeScript statements end to end

use super::create;

fn ts(line: &str) -> String {
    create(line, "typescript")
}

#[test]
fn test_typed_function_signature() {
    assert_eq!(
        ts("function greet(name: string, age?: number): string {"),
        "console.log('greet', 'name:', name, 'age:', age);"
    );
}

#[test]
fn test_generic_constructor() {
    assert_eq!(ts("const map = new Map<string, number>();"), "console.log('map:', map);");
}

#[test]
fn test_as_cast() {
    assert_eq!(
        ts("const el = document.getElementById(id) as HTMLElement;"),
        "console.log('el:', el, 'id:', id);"
    );
}

#[test]
fn test_non_null_assertion_in_chain() {
    assert_eq!(
        ts("const n = user!.profile.name;"),
        "console.log('n:', n, 'user!.profile.name:', user!.profile.name);"
    );
}

#[test]
fn test_tsx_alias() {
    assert_eq!(create("const map = new Map<string, number>();", "tsx"), "console.log('map:', map);");
}
