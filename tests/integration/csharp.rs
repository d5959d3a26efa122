//! C# statements end to end

use super::create;

fn cs(line: &str) -> String {
    create(line, "csharp")
}

#[test]
fn test_awaited_call() {
    assert_eq!(
        cs("var user = await repo.FindAsync(id);"),
        "Console.WriteLine(\"user: \" + user + \" id: \" + id);"
    );
}

#[test]
fn test_foreach_is_the_id() {
    assert_eq!(
        cs("foreach (var item in items) {"),
        "Console.WriteLine(\"foreach\" + \" item: \" + item + \" items: \" + items);"
    );
}

#[test]
fn test_as_cast() {
    assert_eq!(
        cs("var name = obj as string;"),
        "Console.WriteLine(\"name: \" + name + \" obj: \" + obj);"
    );
}

#[test]
fn test_verbatim_identifier() {
    assert_eq!(
        cs("@class.Name = value;"),
        "Console.WriteLine(\"@class.Name: \" + @class.Name + \" value: \" + value);"
    );
}

#[test]
fn test_generic_declaration() {
    assert_eq!(
        cs("Dictionary<string, int> counts = new Dictionary<string, int>();"),
        "Console.WriteLine(\"counts: \" + counts);"
    );
}

#[test]
fn test_aliases() {
    assert_eq!(create("var x = 1;", "cs"), "Console.WriteLine(\"x: \" + x);");
    assert_eq!(create("var x = 1;", "C#"), "Console.WriteLine(\"x: \" + x);");
}
