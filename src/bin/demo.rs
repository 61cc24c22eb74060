use anagram_grouper::group_anagrams;

fn main() -> anyhow::Result<()> {
    let cases: [&[&str]; 4] = [
        &["eat", "tea", "tan", "ate", "nat", "bat"],
        &[""],
        &["a"],
        &["abc", "bca", "cab", "xyz", "zyx"],
    ];

    for words in cases {
        let groups = group_anagrams(words);
        println!("Input: {}", serde_json::to_string(words)?);
        for group in &groups {
            println!("  {}", serde_json::to_string(group)?);
        }
    }

    Ok(())
}
