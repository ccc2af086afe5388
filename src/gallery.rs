use crate::shuffle::{RandomSource, shuffle};
use crate::types::{ListingSnapshot, display_name};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters that cannot appear raw in a single URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// One image card per filename, in a uniformly random order.
///
/// The display order is a fresh permutation of `file_names` on every call;
/// the input slice is left as it was.
#[must_use]
pub fn render_fragments<S, R>(file_names: &[S], base_url: &str, rng: &mut R) -> Vec<String>
where
    S: AsRef<str>,
    R: RandomSource + ?Sized,
{
    let mut order: Vec<&str> = file_names.iter().map(AsRef::as_ref).collect();
    shuffle(&mut order, rng);
    order
        .into_iter()
        .map(|file| render_card(file, base_url))
        .collect()
}

#[must_use]
pub fn image_url(base_url: &str, file_name: &str) -> String {
    format!(
        "{base_url}/uploads/{}",
        utf8_percent_encode(file_name, PATH_SEGMENT)
    )
}

#[must_use]
pub fn render_card(file_name: &str, base_url: &str) -> String {
    let url = image_url(base_url, file_name);
    let name = escape_html(file_name);
    let caption = escape_html(display_name(file_name));
    let src = escape_html(&url);
    let file_js = escape_html(&escape_js(file_name));
    let url_js = escape_html(&escape_js(&url));

    format!(
        r#"<div class="image-card" id="card_{name}">
  <img src="{src}" alt="{caption}" onclick="openImage('{file_js}')">
  <div class="image-info">
    <p>{caption}</p>
    <button onclick="likeImage('{file_js}')" class="like-button">Like</button>
    <span id="likeCount_{name}">0</span> Likes
    <button onclick="shareImage('{url_js}')" class="share-button"><span class="share-icon">➤</span></button>
  </div>
</div>
"#
    )
}

/// Full gallery page for one snapshot: shuffle, render cards, assemble.
#[must_use]
pub fn render_gallery_page<R: RandomSource + ?Sized>(
    snapshot: &ListingSnapshot,
    base_url: &str,
    rng: &mut R,
) -> String {
    let fragments = render_fragments(&snapshot.file_names(), base_url, rng);
    render_page(&fragments)
}

#[must_use]
pub fn render_page(fragments: &[String]) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("  <title>Image Upload and Gallery</title>\n");
    html.push_str(&render_styles());
    html.push_str("</head>\n<body>\n");

    html.push_str("  <h1>L'Instant</h1>\n");

    html.push_str("  <div class=\"image-container\">\n");
    for fragment in fragments {
        html.push_str(fragment);
    }
    html.push_str("  </div>\n");

    html.push_str(&render_upload_form());
    html.push_str(&render_scripts());

    html.push_str("</body>\n</html>\n");

    html
}

#[must_use]
pub fn render_viewer(file_name: &str) -> String {
    let src = escape_html(&image_url("", file_name));

    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Image Viewer</title>
  <style>
    body {{ margin: 0; overflow: hidden; display: flex; align-items: center; justify-content: center; height: 100vh; background-color: rgba(0, 0, 0, 0.9); }}
    img {{ max-width: 100%; max-height: 100%; border-radius: 8px; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1); }}
    .close-btn {{ position: fixed; top: 20px; right: 20px; color: #fff; font-size: 24px; cursor: pointer; z-index: 100; }}
  </style>
</head>
<body>
  <span class="close-btn" onclick="window.location.href = '/'">×</span>
  <img src="{src}" alt="Image">
</body>
</html>
"#
    )
}

fn render_upload_form() -> String {
    r#"  <form id="uploadForm" action="/upload" method="post" enctype="multipart/form-data">
    <label for="image">Choisir une image :</label>
    <input type="file" name="image" id="image" accept="image/*" required>
    <label for="imageName">Nom de l'image :</label>
    <input type="text" name="imageName" id="imageName" placeholder="Nom du fichier">
    <label for="imageEvent">Événement :</label>
    <input type="text" name="imageEvent" id="imageEvent" placeholder="Événement associé">
    <button type="submit">Télécharger</button>
  </form>
"#
    .to_string()
}

fn render_scripts() -> String {
    r#"  <script>
    function likeImage(imageName) {
      const el = document.getElementById('likeCount_' + imageName);
      el.innerText = parseInt(el.innerText, 10) + 1;
    }
    function openImage(imageName) {
      window.location.href = '/images/' + encodeURIComponent(imageName);
    }
    function shareImage(imageUrl) {
      if (navigator.clipboard) {
        navigator.clipboard.writeText(imageUrl).then(() => alert('URL copiée dans le presse-papiers : ' + imageUrl));
        return;
      }
      const textarea = document.createElement('textarea');
      textarea.value = imageUrl;
      document.body.appendChild(textarea);
      textarea.select();
      document.execCommand('copy');
      document.body.removeChild(textarea);
      alert('URL copiée dans le presse-papiers : ' + imageUrl);
    }
  </script>
"#
    .to_string()
}

fn render_styles() -> String {
    r#"  <style>
    body { text-align: center; background-color: #f4f4f4; padding: 20px; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; }
    h1 { color: #333; }
    .image-container { display: flex; flex-wrap: wrap; justify-content: center; }
    .image-card { margin: 10px; padding: 10px; border: 1px solid #ddd; background-color: #fff; box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1); border-radius: 8px; text-align: center; transition: transform 0.3s ease; }
    .image-card img { max-width: 100%; max-height: 200px; object-fit: cover; border-radius: 4px; cursor: pointer; }
    .image-card:hover { transform: scale(1.1); }
    .image-info { margin-top: 10px; }
    #uploadForm { margin: 20px; padding: 20px; border: 1px solid #ddd; background-color: #fff; box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1); border-radius: 8px; text-align: center; }
    #uploadForm label { display: block; margin-top: 10px; }
    #uploadForm input { width: 100%; padding: 10px; margin-top: 5px; margin-bottom: 10px; box-sizing: border-box; }
    #uploadForm button { background-color: #4CAF50; color: #fff; padding: 10px 20px; border: none; border-radius: 4px; cursor: pointer; }
    #uploadForm button:hover { background-color: #45a049; }
    .like-button { background-color: #4CAF50; color: #fff; padding: 5px 10px; border: none; border-radius: 4px; cursor: pointer; margin-top: 5px; float: right; }
    .like-button:hover { background-color: #45a049; }
    .share-button { display: inline-block; margin-right: 10px; padding: 8px; background-color: #3498db; color: #fff; border: none; border-radius: 50%; cursor: pointer; transition: background-color 0.3s ease; position: relative; float: left; width: 32px; height: 32px; }
    .share-button:hover { background-color: #2980b9; }
    .share-icon { position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); }
    @media (max-width: 768px) {
      body { padding: 10px; }
      .image-card { margin: 5px; }
    }
  </style>
"#
    .to_string()
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// Single-quoted JS string literal body; HTML-escape the result for attributes.
fn escape_js(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
