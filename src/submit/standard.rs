/// Picks the language-standard flag for a compiler id. MSVC spells the
/// switch with a colon; everything else on the public instance takes the
/// GNU-style spelling. This is plain substring inspection, the id itself is
/// never validated.
pub fn standard_flag(compiler_id: &str) -> &'static str {
    if compiler_id.contains("vcpp") {
        "-std:c++20"
    } else {
        "-std=c++20"
    }
}

#[cfg(test)]
mod tests {
    use super::standard_flag;

    #[test]
    fn gcc_and_clang_ids_use_the_gnu_spelling() {
        assert_eq!(standard_flag("g142"), "-std=c++20");
        assert_eq!(standard_flag("gsnapshot"), "-std=c++20");
        assert_eq!(standard_flag("clang1910"), "-std=c++20");
    }

    #[test]
    fn msvc_ids_use_the_colon_spelling() {
        assert_eq!(standard_flag("vcpp_v19_latest_x64"), "-std:c++20");
    }
}
