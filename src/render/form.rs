use crate::core::page::Page;

pub const FORM_ID: &str = "contact-form";
pub const YEAR_ID: &str = "year";

/// Inline interceptor injected into pages that carry the contact form:
/// suppress the default navigation, acknowledge, reset the fields. No
/// network submission happens.
const CONTACT_FORM_SCRIPT: &str = "<script>\
(function () {\
  var form = document.getElementById('contact-form');\
  if (!form) return;\
  form.addEventListener('submit', function (e) {\
    e.preventDefault();\
    alert('Thank you for contacting us! We will get back to you soon.');\
    form.reset();\
  });\
})();\
</script>";

pub fn wire_contact_form(page: &mut Page) -> bool {
    if !page.has_element(FORM_ID) {
        return false;
    }
    page.inject_before_body_end(CONTACT_FORM_SCRIPT)
}

/// Footer year, independent of the data fetches.
pub fn set_footer_year(page: &mut Page, year: i32) -> bool {
    page.set_text(YEAR_ID, &year.to_string())
}
