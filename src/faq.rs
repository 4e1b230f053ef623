//! Static FAQ payload served under `/greet/questions`.

use serde::Serialize;

/// A single FAQ entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FaqEntry {
    /// Question title.
    pub title: &'static str,
    /// Answer body.
    pub content: &'static str,
}

const FAQ: [FaqEntry; 5] = [
    FaqEntry {
        title: "Where is my order?",
        content: "Lorem ipsum dolor sit amet, consectetuer adipiscing elit, sed diam nonummy nibh euismod tincidunt ut laoreet dolore magna aliquam erat volutpat. Ut wisi enim ad minim veniam, quis nostrud exerci tation ullamcorper suscipit lobortis nisl ut aliquip ex ea commodo consequat. Duis autem vel eum iriure dolor in hendrerit in vulputate velit esse molestie consequat, vel illum dolore eu feugiat nulla facilisis at vero eros.",
    },
    FaqEntry {
        title: "Where do you ship?",
        content: "Qui et quod dolorem eaque. Soluta ut dolor dolor debitis. Molestias sunt in necessitatibus odit quo odio omnis odit. Atque deleniti reprehenderit sapiente consectetur consectetur quia autem repudiandae.",
    },
    FaqEntry {
        title: "How do i return an item?",
        content: "Voluptate cupiditate officia quia accusantium. Fugiat ut praesentium quia ut et labore reiciendis fugit. Voluptas eos maiores itaque aut. Sequi harum dolor neque sunt rerum iste ducimus. Quas sapiente cumque voluptatem repudiandae ipsum. Natus quis aut aut fugiat. Nisi non sed reprehenderit mollitia commodi et qui error. Velit autem omnis et repellendus facere libero praesentium. Sit aut possimus eligendi consectetur beatae. Iste et officia delectus modi ratione inventore enim voluptatem.",
    },
    FaqEntry {
        title: "Why has my order been cancelled?",
        content: "Consequatur labore repellat quo eaque provident natus et. Fuga molestias quibusdam quam maiores at debitis. Molestias occaecati iste dignissimos voluptatem quis est quidem. Expedita natus porro id ut nesciunt cupiditate quis. Doloribus suscipit ipsa ipsam qui. Voluptatem voluptatem ut numquam ex natus iste.",
    },
    FaqEntry {
        title: "Why won’t my discount code work?",
        content: "Inventore iste reprehenderit aut reiciendis repellendus. Quas cumque aliquam accusantium et itaque quisquam voluptatem. Commodi quo quia occaecati dicta ratione qui at tempore. At saepe est et saepe accusamus voluptates.",
    },
];

/// The fixed FAQ list, in display order.
pub fn entries() -> &'static [FaqEntry] {
    &FAQ
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_stable_and_ordered() {
        let entries = entries();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].title, "Where is my order?");
        assert_eq!(entries[4].title, "Why won’t my discount code work?");
    }

    #[test]
    fn entries_serialize_with_title_and_content() {
        let json = serde_json::to_value(entries()).unwrap();
        let first = &json[0];
        assert_eq!(first["title"], "Where is my order?");
        assert!(first["content"].as_str().unwrap().starts_with("Lorem ipsum"));
    }
}
