// tests/integration_tests/rewrite_test.rs
use twsize::replace_size_classes;

#[test]
fn test_every_qualifying_size() {
    for n in 1..=12 {
        assert_eq!(replace_size_classes(&format!("h-{n} w-{n}")), format!("size-{n}"));
        assert_eq!(replace_size_classes(&format!("w-{n} h-{n}")), format!("size-{n}"));
    }
}

#[test]
fn test_unequal_or_out_of_range_unchanged() {
    let values = [0_u32, 13, 42, 99];
    for n in values {
        for m in 0..=99_u32 {
            for pair in [format!("h-{n} w-{m}"), format!("w-{m} h-{n}")] {
                assert_eq!(replace_size_classes(&pair), pair, "{pair} should be left alone");
            }
        }
    }
    for n in 1..=12_u32 {
        for m in (0..=99_u32).filter(|&m| m != n) {
            let pair = format!("h-{n} w-{m}");
            assert_eq!(replace_size_classes(&pair), pair);
        }
    }
}

#[test]
fn test_whole_document() {
    let input = "<ul>\n  <li class=\"h-6 w-6\"></li>\n  <li class=\"w-6 h-7\"></li>\n  <li class=\"p-2 w-11\n      h-11\"></li>\n</ul>\n";
    let expected = "<ul>\n  <li class=\"size-6\"></li>\n  <li class=\"w-6 h-7\"></li>\n  <li class=\"p-2 size-11\"></li>\n</ul>\n";

    let output = replace_size_classes(input);
    assert_eq!(output, expected);
    assert_eq!(replace_size_classes(&output), output);
}

#[test]
fn test_no_match_is_byte_identical() {
    let input = "<main class=\"min-h-screen w-full\">héllo ✓</main>";
    assert_eq!(replace_size_classes(input), input);
}
