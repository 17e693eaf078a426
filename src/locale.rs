//! Static two-locale string table. Toggled by explicit user action, resolved
//! through the single `text` accessor so no component holds mutable locale
//! state of its own.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Hi,
}

impl Locale {
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Hi,
            Locale::Hi => Locale::En,
        }
    }

    /// Label shown on the toggle button: the locale you would switch to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Locale::En => "हिंदी",
            Locale::Hi => "English",
        }
    }
}

pub struct LocaleText {
    pub app_title: &'static str,
    pub upload_title: &'static str,
    pub upload_subtitle: &'static str,
    pub drop_hint: &'static str,
    pub drop_active_hint: &'static str,
    pub or_separator: &'static str,
    pub browse_files: &'static str,
    pub take_photo: &'static str,
    pub viewfinder_hint: &'static str,
    pub capture_photo: &'static str,
    pub cancel: &'static str,
    pub image_selected: &'static str,
    pub analyze_image: &'static str,
    pub loading_title: &'static str,
    pub step_uploaded: &'static str,
    pub step_structure: &'static str,
    pub step_breed: &'static str,
    pub step_report: &'static str,
    pub result_title: &'static str,
    pub detected_breed: &'static str,
    pub dairy_level: &'static str,
    pub purpose: &'static str,
    pub confidence_score: &'static str,
    pub usability_score: &'static str,
    pub evidence_title: &'static str,
    pub new_analysis: &'static str,
    pub ok: &'static str,
    pub notice_invalid_file: &'static str,
    pub notice_analysis_failed: &'static str,
    pub notice_camera_failed: &'static str,
}

pub fn text(locale: Locale) -> &'static LocaleText {
    match locale {
        Locale::En => &EN,
        Locale::Hi => &HI,
    }
}

static EN: LocaleText = LocaleText {
    app_title: "Cattle Classification",
    upload_title: "Upload Cattle Photo",
    upload_subtitle: "Get instant AI-powered breed classification",
    drop_hint: "Drag and drop your image here",
    drop_active_hint: "Drop the image here...",
    or_separator: "or",
    browse_files: "Browse Files",
    take_photo: "Take Photo",
    viewfinder_hint: "Camera ready: frame the animal",
    capture_photo: "Capture Photo",
    cancel: "Cancel",
    image_selected: "Image Selected",
    analyze_image: "Analyze Image",
    loading_title: "Analyzing Your Image...",
    step_uploaded: "Image Uploaded",
    step_structure: "Analyzing Body Structure",
    step_breed: "Identifying Breed",
    step_report: "Generating Report",
    result_title: "Classification Results",
    detected_breed: "Detected Breed",
    dairy_level: "Dairy Level",
    purpose: "Purpose",
    confidence_score: "Confidence Score",
    usability_score: "Usability Score",
    evidence_title: "Classification Evidence",
    new_analysis: "New Analysis",
    ok: "OK",
    notice_invalid_file: "File error: Please upload an image file (jpg, png).",
    notice_analysis_failed: "Failed to analyze image. Please try again.",
    notice_camera_failed: "Could not capture a photo from the camera.",
};

static HI: LocaleText = LocaleText {
    app_title: "पशु नस्ल पहचान",
    upload_title: "पशु की तस्वीर अपलोड करें",
    upload_subtitle: "तुरंत AI-आधारित नस्ल पहचान पाएं",
    drop_hint: "अपनी तस्वीर यहाँ खींचकर छोड़ें",
    drop_active_hint: "तस्वीर यहाँ छोड़ें...",
    or_separator: "या",
    browse_files: "फ़ाइलें चुनें",
    take_photo: "फोटो लें",
    viewfinder_hint: "कैमरा तैयार है, पशु को फ्रेम में रखें",
    capture_photo: "फोटो खींचें",
    cancel: "रद्द करें",
    image_selected: "तस्वीर चुनी गई",
    analyze_image: "तस्वीर का विश्लेषण करें",
    loading_title: "आपकी तस्वीर का विश्लेषण हो रहा है...",
    step_uploaded: "तस्वीर अपलोड हुई",
    step_structure: "शारीरिक बनावट का विश्लेषण",
    step_breed: "नस्ल की पहचान",
    step_report: "रिपोर्ट तैयार हो रही है",
    result_title: "वर्गीकरण परिणाम",
    detected_breed: "नस्ल",
    dairy_level: "दुग्ध स्तर",
    purpose: "उपयोग",
    confidence_score: "विश्वास स्कोर",
    usability_score: "उपयोगिता स्कोर",
    evidence_title: "वर्गीकरण के प्रमाण",
    new_analysis: "नई पहचान शुरू करें",
    ok: "ठीक है",
    notice_invalid_file: "फ़ाइल त्रुटि: कृपया एक छवि फ़ाइल (jpg, png) अपलोड करें।",
    notice_analysis_failed: "तस्वीर का विश्लेषण विफल रहा। कृपया पुनः प्रयास करें।",
    notice_camera_failed: "कैमरे से फोटो नहीं ली जा सकी।",
};
