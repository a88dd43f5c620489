//! テストフィクスチャ

/// 10 code lines, 2 comment lines, authored by `X`.
#[allow(dead_code)]
pub const A_JAVA: &str = "\
/** @author X */
public class A {
    // first field
    int a = 1;
    int b = 2;
    int c = 3;
    int d = 4;
    int e = 5;
    int f = 6;
    int g = 7;
    int h = 8;
    int sum() { return a + b; }
}
";

/// 5 code lines, 1 comment line, authored by `X` and `Y`.
#[allow(dead_code)]
pub const B_JAVA: &str = "\
/** @author X, Y */
public class B {
    int a = 1;
    int b = 2;
    int c = 3;
    int d() { return a; }
}
";

/// No author tag at all.
#[allow(dead_code)]
pub const UNTAGGED_JAVA: &str = "\
/** Utility holder. */
final class Util {
    static int one() { return 1; }
}
";

/// Two tagged blocks; only the first counts.
#[allow(dead_code)]
pub const TWO_BLOCKS_JAVA: &str = "\
/**
 * @author first
 */
class Two {
    /** @author second */
    void m() {}
}
";

/// Workspace holding `A.java` and `B.java`.
#[allow(dead_code)]
pub fn two_file_workspace() -> super::TempWorkspace {
    let ws = super::TempWorkspace::new();
    ws.create_file("A.java", A_JAVA);
    ws.create_file("B.java", B_JAVA);
    ws
}
