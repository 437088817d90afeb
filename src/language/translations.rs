use crate::language::Language;

/// Every user-visible string the identify flow and catalogue views render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    PredictedBreed,
    PredictedDemo,
    NotCattle,
    PleaseUpload,
    Processing,
    NoResult,
    AllTiersFailed,
    ApiWarning,
    SelectImage,
    Identify,
    Confidence,
    Language,
    BreedDetails,
    Description,
    Characteristics,
    FodderRequirements,
    GovernmentSchemes,
    BestPractices,
    NoDetailedInfo,
    MilkProduction,
    BestTraits,
    BestPairedWith,
    EstimatedCost,
    CattleHeading,
    BuffaloHeading,
}

impl Message {
    /// Text in `language`, falling back to English when no translation exists.
    pub fn text(self, language: Language) -> &'static str {
        let translated = match language {
            Language::English => None,
            Language::Hindi => self.hindi(),
            Language::Marathi => self.marathi(),
            Language::Gujarati => self.gujarati(),
        };
        translated.unwrap_or_else(|| self.english())
    }

    /// Substitutes `{label}` in the template.
    pub fn with_label(self, language: Language, label: &str) -> String {
        self.text(language).replace("{label}", label)
    }

    fn english(self) -> &'static str {
        match self {
            Message::PredictedBreed => "Predicted Breed: {label}",
            Message::PredictedDemo => "Predicted (demo): {label}",
            Message::NotCattle => "❌ This doesn't appear to be a cow or buffalo. Please upload a clear image of cattle.",
            Message::PleaseUpload => "Please upload an image first.",
            Message::Processing => "Processing...",
            Message::NoResult => "No prediction returned by API.",
            Message::AllTiersFailed => "No prediction could be made for this image.",
            Message::ApiWarning => "The prediction service could not be reached. Showing an offline result.",
            Message::SelectImage => "Drop an image here or enter its path",
            Message::Identify => "Identify",
            Message::Confidence => "Confidence",
            Message::Language => "Language",
            Message::BreedDetails => "Breed details",
            Message::Description => "Description",
            Message::Characteristics => "Characteristics",
            Message::FodderRequirements => "Fodder requirements",
            Message::GovernmentSchemes => "Government schemes",
            Message::BestPractices => "Best practices",
            Message::NoDetailedInfo => "No detailed info available for this breed.",
            Message::MilkProduction => "Milk Production",
            Message::BestTraits => "Best Traits",
            Message::BestPairedWith => "Best Paired With",
            Message::EstimatedCost => "Estimated Cost",
            Message::CattleHeading => "Cattle Breeds",
            Message::BuffaloHeading => "Buffalo Breeds",
        }
    }

    fn hindi(self) -> Option<&'static str> {
        Some(match self {
            Message::PredictedBreed => "अनुमानित नस्ल: {label}",
            Message::PredictedDemo => "अनुमानित (डेमो): {label}",
            Message::NotCattle => "❌ यह गाय या भैंस नहीं लगती। कृपया पशु की स्पष्ट तस्वीर अपलोड करें।",
            Message::PleaseUpload => "कृपया पहले एक तस्वीर अपलोड करें।",
            Message::Processing => "प्रक्रिया जारी है...",
            Message::NoResult => "API से कोई अनुमान नहीं मिला।",
            Message::AllTiersFailed => "इस तस्वीर के लिए कोई अनुमान नहीं मिला।",
            Message::ApiWarning => "पहचान सेवा उपलब्ध नहीं है। ऑफ़लाइन परिणाम दिखाया जा रहा है।",
            Message::Identify => "पहचानें",
            Message::Confidence => "विश्वास",
            Message::Language => "भाषा",
            Message::Description => "विवरण",
            Message::Characteristics => "विशेषताएँ",
            Message::FodderRequirements => "चारे की आवश्यकता",
            Message::GovernmentSchemes => "सरकारी योजनाएँ",
            Message::BestPractices => "सर्वोत्तम तरीके",
            Message::MilkProduction => "दूध उत्पादन",
            Message::BestTraits => "सर्वश्रेष्ठ गुण",
            Message::BestPairedWith => "किसके साथ सर्वोत्तम",
            Message::EstimatedCost => "अनुमानित लागत",
            Message::CattleHeading => "गाय की नस्लें",
            Message::BuffaloHeading => "भैंस की नस्लें",
            _ => return None,
        })
    }

    fn marathi(self) -> Option<&'static str> {
        Some(match self {
            Message::PredictedBreed => "अंदाजित वंश: {label}",
            Message::PredictedDemo => "अंदाजित (डेमो): {label}",
            Message::NotCattle => "❌ ही गाय किंवा म्हैस वाटत नाही. कृपया जनावराचा स्पष्ट फोटो अपलोड करा.",
            Message::PleaseUpload => "कृपया आधी एक फोटो अपलोड करा.",
            Message::Processing => "प्रक्रिया सुरू आहे...",
            Message::NoResult => "API कडून कोणताही अंदाज मिळाला नाही.",
            Message::Identify => "ओळखा",
            Message::Language => "भाषा",
            Message::Description => "वर्णन",
            Message::Characteristics => "वैशिष्ट्ये",
            Message::MilkProduction => "दुध उत्पादन",
            Message::BestTraits => "सर्वोत्तम गुणधर्म",
            Message::BestPairedWith => "कोणासोबत सर्वोत्तम",
            Message::EstimatedCost => "अनुमानित किंमत",
            Message::CattleHeading => "गायीचे वंश",
            Message::BuffaloHeading => "म्हशीचे वंश",
            _ => return None,
        })
    }

    fn gujarati(self) -> Option<&'static str> {
        Some(match self {
            Message::PredictedBreed => "અનુમાનિત જાતિ: {label}",
            Message::PredictedDemo => "અનુમાનિત (ડેમો): {label}",
            Message::NotCattle => "❌ આ ગાય કે ભેંસ લાગતી નથી. કૃપા કરીને પશુનો સ્પષ્ટ ફોટો અપલોડ કરો.",
            Message::PleaseUpload => "કૃપા કરીને પહેલા ફોટો અપલોડ કરો.",
            Message::Processing => "પ્રક્રિયા ચાલુ છે...",
            Message::NoResult => "API તરફથી કોઈ અનુમાન મળ્યું નથી.",
            Message::Identify => "ઓળવો",
            Message::Language => "ભાષા",
            Message::Description => "વર્ણન",
            Message::MilkProduction => "દૂધ ઉત્પાદન",
            Message::BestTraits => "શ્રેષ્ઠ લક્ષણો",
            Message::BestPairedWith => "કયાં સાથે શ્રેષ્ઠ",
            Message::EstimatedCost => "અંદાજિત કિંમત",
            Message::CattleHeading => "ગાયની જાતિઓ",
            Message::BuffaloHeading => "ભેંસની જાતિઓ",
            _ => return None,
        })
    }
}
