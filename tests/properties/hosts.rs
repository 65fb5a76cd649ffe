use plc_deploy::infrastructure::repositories::parse_hosts;
use proptest::prelude::*;

fn host() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,10}(\\.[a-z0-9]{1,5}){0,2}"
}

proptest! {
    #[test]
    fn hosts_keep_order_and_duplicates(hosts in prop::collection::vec(host(), 0..12)) {
        let content = hosts.join("\n");
        let parsed: Vec<String> = parse_hosts(&content).into_iter().map(|t| t.to_string()).collect();
        prop_assert_eq!(parsed, hosts);
    }

    #[test]
    fn comments_and_blank_lines_are_ignored(
        lines in prop::collection::vec((host(), 0u8..3), 0..12)
    ) {
        let mut content = String::new();
        let mut expected = Vec::new();
        for (host, shape) in &lines {
            match shape {
                0 => {
                    content.push_str(&format!("  {host}  \n"));
                    expected.push(host.clone());
                }
                1 => content.push_str(&format!("# {host}\n\n")),
                _ => {
                    content.push_str(&format!("{host} # trailing note\n"));
                    expected.push(host.clone());
                }
            }
        }

        let parsed: Vec<String> = parse_hosts(&content).into_iter().map(|t| t.to_string()).collect();
        prop_assert_eq!(parsed, expected);
    }
}
