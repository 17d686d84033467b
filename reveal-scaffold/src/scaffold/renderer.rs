//! Index page renderer.

use super::{ScaffoldParams, WriteError};
use handlebars::Handlebars;
use serde_json::json;

/// Name the index page template is registered under.
const INDEX_TEMPLATE_NAME: &str = "index";

/// The reveal.js index page.
pub const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
	<head>
		<meta charset="UTF-8">
		<title>{{title}}</title>
		<link rel="stylesheet" href="css/reveal.css">
		<link rel="stylesheet" href="css/theme/{{theme}}.css" id="theme">
		<link rel="stylesheet" href="lib/css/zenburn.css">
		<script src="livereload.js"></script>
	</head>
	<body>
		<div class="reveal">
			<div class="slides">
				<section data-markdown="{{slide}}"
					data-separator="^\r?\n\r?\n\r?\n"
					data-separator-vertical="^\r?\n---\r?\n$"
				>
				</section>
			</div>
		</div>
		<script src="lib/js/head.min.js"></script>
		<script src="js/reveal.js"></script>
		<script>
			Reveal.initialize({
				controls: true,
				progress: true,
				history: true,
				center: true,
				theme: Reveal.getQueryHash().theme, // available themes are in /css/theme
				transition: Reveal.getQueryHash().transition || 'default', // default/cube/page/concave/zoom/linear/fade/none
				// Optional libraries used to extend on reveal.js
				dependencies: [
					{ src: 'lib/js/classList.js', condition: function() { return !document.body.classList; } },
					{ src: 'plugin/markdown/marked.js', condition: function() { return !!document.querySelector( '[data-markdown]' ); } },
					{ src: 'plugin/markdown/markdown.js', condition: function() { return !!document.querySelector( '[data-markdown]' ); } },
					{ src: 'plugin/highlight/highlight.js', async: true, callback: function() { hljs.initHighlightingOnLoad(); } },
					{ src: 'plugin/zoom-js/zoom.js', async: true, condition: function() { return !!document.body.classList; } },
					{ src: 'plugin/notes/notes.js', async: true, condition: function() { return !!document.body.classList; } }
				]
			});
		</script>
	</body>
</html>
"#;

/// Creates the Handlebars registry with the index page registered.
///
/// The registry keeps the default HTML escaping and runs in strict mode so a
/// missing variable fails instead of rendering empty.
///
/// # Errors
///
/// Returns an error if the template does not parse.
pub fn create_handlebars_registry() -> Result<Handlebars<'static>, WriteError> {
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(true);
    hbs.register_template_string(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;
    Ok(hbs)
}

/// Renders the index page.
pub struct IndexRenderer {
    handlebars: Handlebars<'static>,
}

impl IndexRenderer {
    /// Creates a new renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if the index template does not parse.
    pub fn new() -> Result<Self, WriteError> {
        Ok(Self {
            handlebars: create_handlebars_registry()?,
        })
    }

    /// Renders `index.html` for the given parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(&self, params: &ScaffoldParams) -> Result<String, WriteError> {
        let data = json!({
            "title": params.title,
            "theme": params.theme,
            "slide": params.slide,
        });

        Ok(self.handlebars.render(INDEX_TEMPLATE_NAME, &data)?)
    }
}
