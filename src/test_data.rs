#[cfg(test)]
pub const POST_DATA: &str = r#"---
isPublished: true
title: Building this blog
description: Notes on how this site is put together
keywords: astro, tailwind
publishedOn: "2023-02-14"
---

Every personal site starts with good intentions and a blank page.

<h2>Why static</h2>

There is no server to patch, no database to back up and nothing to keep
running at three in the morning. The whole site is a folder of files.
"#;

#[cfg(test)]
pub const POST_DATA_DRAFT: &str = r#"---
isDraft: true
title: Half an idea
description: Not ready yet
publishedOn: "2023-05-01"
---

Some day this will be a post.
"#;

#[cfg(test)]
pub const POST_DATA_INVALID: &str = r#"---
title: Missing the rest
isDraft: "maybe"
---

Body without the required fields.
"#;

#[cfg(test)]
pub const POST_DATA_NO_FRONT_MATTER: &str = "Just a body, no metadata at all.\n";
