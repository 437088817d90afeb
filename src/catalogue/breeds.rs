use super::{BreedEntry, BreedKind, LocalizedText};

pub(super) static BREEDS: &[BreedEntry] = &[
    BreedEntry {
        slug: "amritmahal",
        kind: BreedKind::Cattle,
        name: LocalizedText {
            en: "Amritmahal",
            hi: "अमृतमहल",
            mr: "अमृतमहल",
            gu: "અમૃતમહલ",
        },
        description: LocalizedText {
            en: "Origin: Karnataka. Strong draught breed.",
            hi: "मूल: कर्नाटक। मज़बूत बैल नस्ल।",
            mr: "मूळ: कर्नाटक. मजबूत बैल जात.",
            gu: "મૂળ: કર્ણાટક. મજબૂત બળદ જાતિ.",
        },
        image: "assets/amritmahal.jpg",
        milk_yield: "2–4 L/day",
        traits: "Strong draught, endurance",
        companion: "Deoni",
        cost_range: "₹45,000–70,000",
    },
    BreedEntry {
        slug: "kangayam",
        kind: BreedKind::Cattle,
        name: LocalizedText {
            en: "Kangayam",
            hi: "कांगायम",
            mr: "कांगायम",
            gu: "કાંગાયમ",
        },
        description: LocalizedText {
            en: "Origin: Tamil Nadu. Hardy draught cattle.",
            hi: "मूल: तमिलनाडु। कठोर बैल नस्ल।",
            mr: "मूळ: तामिळनाडू. कणखर बैल जात.",
            gu: "મૂળ: તમિલનાડુ. કઠોર બળદ જાતિ.",
        },
        image: "assets/kangayam.jpg",
        milk_yield: "3–5 L/day",
        traits: "Heat tolerant, hardy",
        companion: "Jersey",
        cost_range: "₹50,000–80,000",
    },
    BreedEntry {
        slug: "bargur",
        kind: BreedKind::Cattle,
        name: LocalizedText {
            en: "Bargur",
            hi: "बरगुर",
            mr: "बरगुर",
            gu: "બર્ગુર",
        },
        description: LocalizedText {
            en: "Origin: Tamil Nadu. Agile; hilly terrain.",
            hi: "मूल: तमिलनाडु। पहाड़ी इलाकों में उपयोगी।",
            mr: "मूळ: तामिळनाडू. डोंगराळ भागात उपयुक्त.",
            gu: "મૂળ: તમિલનાડુ. પહાડી વિસ્તારો માટે યોગ્ય.",
        },
        image: "assets/bargur.jpg",
        milk_yield: "2–3 L/day",
        traits: "Agile, hilly terrain use",
        companion: "Kangayam",
        cost_range: "₹35,000–60,000",
    },
    BreedEntry {
        slug: "umblachery",
        kind: BreedKind::Cattle,
        name: LocalizedText {
            en: "Umblachery",
            hi: "उम्बलाचेरी",
            mr: "उम्बलाचेरी",
            gu: "ઉમ્બલાચેરી",
        },
        description: LocalizedText {
            en: "Origin: Tamil Nadu. Good draught; disease resistance.",
            hi: "मूल: तमिलनाडु। अच्छा बैल, रोग प्रतिरोध।",
            mr: "मूळ: तामिळनाडू. चांगला बैल, रोग प्रतिकार.",
            gu: "મૂળ: તમિલનાડુ. સારું બળદ, રોગ પ્રતિરોધક.",
        },
        image: "assets/umblachery.jpg",
        milk_yield: "3–5 L/day",
        traits: "Good draught, disease resistant",
        companion: "Hariana",
        cost_range: "₹40,000–65,000",
    },
    BreedEntry {
        slug: "pulikulam",
        kind: BreedKind::Cattle,
        name: LocalizedText {
            en: "Pulikulam",
            hi: "पुलिकुलम",
            mr: "पुलिकुलम",
            gu: "પુલિકુલમ",
        },
        description: LocalizedText {
            en: "Origin: Tamil Nadu. Hardy; famous in Jallikattu.",
            hi: "मूल: तमिलनाडु। जल्लीकट्टू में प्रसिद्ध।",
            mr: "मूळ: तामिळनाडू. जल्लीकट्टूसाठी प्रसिद्ध.",
            gu: "મૂળ: તમિલનાડુ. જલિકટ્ટુમાં પ્રખ્યાત.",
        },
        image: "assets/pulikulam.jpg",
        milk_yield: "2–3 L/day",
        traits: "Hardy, Jallikattu",
        companion: "Kangayam",
        cost_range: "₹35,000–55,000",
    },
    BreedEntry {
        slug: "hariana",
        kind: BreedKind::Cattle,
        name: LocalizedText {
            en: "Hariana",
            hi: "हरियाणा",
            mr: "हरियाणा",
            gu: "હરિયાણા",
        },
        description: LocalizedText {
            en: "Origin: Haryana. Dual-purpose breed.",
            hi: "मूल: हरियाणा। दूध व बैल दोनों।",
            mr: "मूळ: हरियाणा. दुहेरी उद्देश.",
            gu: "મૂળ: હરિયાણા. દૂધ અને બળદ.",
        },
        image: "assets/hariana.jpg",
        milk_yield: "5–10 L/day",
        traits: "Dual-purpose",
        companion: "Holstein Friesian",
        cost_range: "₹55,000–90,000",
    },
    BreedEntry {
        slug: "deoni",
        kind: BreedKind::Cattle,
        name: LocalizedText {
            en: "Deoni",
            hi: "देओनी",
            mr: "देओनी",
            gu: "દેઓની",
        },
        description: LocalizedText {
            en: "Origin: Maharashtra. Dual-purpose; disease resistant.",
            hi: "मूल: महाराष्ट्र। दुग्ध व बैल; रोग प्रतिरोध।",
            mr: "मूळ: महाराष्ट्र. दुहेरी उपयोग; रोग प्रतिकार.",
            gu: "મૂળ: મહારાષ્ટ્ર. દૂધ/બળદ; રોગ પ્રતિરોધક.",
        },
        image: "assets/deoni.jpg",
        milk_yield: "8–10 L/day",
        traits: "Dual-purpose, disease resistant",
        companion: "Amritmahal",
        cost_range: "₹60,000–95,000",
    },
    BreedEntry {
        slug: "jersey",
        kind: BreedKind::Cattle,
        name: LocalizedText {
            en: "Jersey",
            hi: "जर्सी",
            mr: "जर्सी",
            gu: "જર્સી",
        },
        description: LocalizedText {
            en: "Origin: Channel Islands. High fat milk.",
            hi: "मूल: चैनल द्वीप। उच्च वसा दूध।",
            mr: "मूळ: चॅनेल बेटे. जास्त चरबी दूध.",
            gu: "મૂળ: ચેનલ આઇલેન્ડ્સ. ઉચ્ચ ચરબી દૂધ.",
        },
        image: "assets/Jersey.jpeg",
        milk_yield: "15–20 L/day",
        traits: "High fat milk, adaptable",
        companion: "Kangayam",
        cost_range: "₹80,000–1,20,000",
    },
    BreedEntry {
        slug: "holstein",
        kind: BreedKind::Cattle,
        name: LocalizedText {
            en: "Holstein Friesian",
            hi: "होल्स्टीन फ्रिज़ियन",
            mr: "होल्स्टीन फ्रिज़ियन",
            gu: "હોલ્સ્ટીન ફ્રિઝિયન",
        },
        description: LocalizedText {
            en: "Origin: Netherlands. Highest milk yields.",
            hi: "मूल: नीदरलैंड। सर्वाधिक दुग्ध।",
            mr: "मूळ: नेदरलँड्स. सर्वाधिक दूध.",
            gu: "મૂળ: નેધરલેન્ડ. સર્વોચ્ચ દૂધ.",
        },
        image: "assets/Holstein Friesian.jpg",
        milk_yield: "25–30 L/day",
        traits: "Highest milk yield",
        companion: "Hariana",
        cost_range: "₹1,00,000–1,50,000",
    },
    BreedEntry {
        slug: "brownswiss",
        kind: BreedKind::Cattle,
        name: LocalizedText {
            en: "Brown Swiss",
            hi: "ब्राउन स्विस",
            mr: "ब्राउन स्विस",
            gu: "બ્રાઉન સ્વિસ",
        },
        description: LocalizedText {
            en: "Origin: Switzerland. High protein milk.",
            hi: "मूल: स्विट्जरलैंड। उच्च प्रोटीन दूध।",
            mr: "मूळ: स्वित्झर्लंड. उच्च प्रथिन.",
            gu: "મૂળ: સ્વિટ્ઝર્લૅન્ડ. ઉચ્ચ પ્રોટીન દૂધ.",
        },
        image: "assets/brownswiss.jpg",
        milk_yield: "18–22 L/day",
        traits: "Docile, high protein milk",
        companion: "Jersey",
        cost_range: "₹90,000–1,40,000",
    },
    BreedEntry {
        slug: "reddane",
        kind: BreedKind::Cattle,
        name: LocalizedText {
            en: "Red Dane",
            hi: "रेड डेन",
            mr: "रेड डेन",
            gu: "રેડ ડેન",
        },
        description: LocalizedText {
            en: "Origin: Denmark. Balanced production.",
            hi: "मूल: डेनमार्क। संतुलित उत्पादन।",
            mr: "मूळ: डेन्मार्क. संतुलित उत्पादन.",
            gu: "મૂળ: ડેનમાર્ક. સંતુલિત ઉત્પાદન.",
        },
        image: "assets/reddane.jpg",
        milk_yield: "15–20 L/day",
        traits: "Balanced production",
        companion: "Brown Swiss",
        cost_range: "₹85,000–1,30,000",
    },
    BreedEntry {
        slug: "ayrshire",
        kind: BreedKind::Cattle,
        name: LocalizedText {
            en: "Ayrshire",
            hi: "एयर्शायर",
            mr: "एयर्शायर",
            gu: "એયરશાયર",
        },
        description: LocalizedText {
            en: "Origin: Scotland. Efficient grazers.",
            hi: "मूल: स्कॉटलैंड। घास चरने में कुशल।",
            mr: "मूळ: स्कॉटलंड. कार्यक्षम चारण.",
            gu: "મૂળ: સ્કોટલેન્ડ. ઘાસ ચરવામાં કુશળ.",
        },
        image: "assets/ayrshier.jpg",
        milk_yield: "20–25 L/day",
        traits: "Efficient grazers",
        companion: "Jersey",
        cost_range: "₹95,000–1,35,000",
    },
    BreedEntry {
        slug: "toda",
        kind: BreedKind::Buffalo,
        name: LocalizedText {
            en: "Toda Buffalo",
            hi: "टोडा भैंस",
            mr: "टोडा म्हैस",
            gu: "ટોડા ભેંસ",
        },
        description: LocalizedText {
            en: "Origin: Nilgiris. High fat buffalo milk.",
            hi: "मूल: नीलगिरि। उच्च वसा दूध।",
            mr: "मूळ: निलगिरी. जास्त चरबी दूध.",
            gu: "મૂળ: નીલગિરી. ઉચ્ચ ચરબી દૂધ.",
        },
        image: "assets/toda.jpg",
        milk_yield: "4–6 L/day",
        traits: "High fat milk",
        companion: "Murrah",
        cost_range: "₹70,000–1,00,000",
    },
    BreedEntry {
        slug: "murrah",
        kind: BreedKind::Buffalo,
        name: LocalizedText {
            en: "Murrah",
            hi: "मुर्रा",
            mr: "मुर्रा",
            gu: "મુર્રાહ",
        },
        description: LocalizedText {
            en: "Origin: Haryana/Punjab. Top milch buffalo.",
            hi: "मूल: हरियाणा/पंजाब। प्रमुख दुग्ध भैंस।",
            mr: "मूळ: हरियाणा/पंजाब. प्रमुख दूधाळ.",
            gu: "મૂળ: હરિયાણા/પંજાબ. મુખ્ય દૂધાળ.",
        },
        image: "assets/murrah.jpg",
        milk_yield: "25–30 L/day",
        traits: "Top buffalo breed; high fat",
        companion: "Surti",
        cost_range: "₹1,00,000–1,50,000",
    },
    BreedEntry {
        slug: "surti",
        kind: BreedKind::Buffalo,
        name: LocalizedText {
            en: "Surti",
            hi: "सुरती",
            mr: "सुरती",
            gu: "સુરતી",
        },
        description: LocalizedText {
            en: "Origin: Gujarat. High fat, medium yield.",
            hi: "मूल: गुजरात। उच्च वसा; मध्यम उत्पादन।",
            mr: "मूळ: गुजरात. उच्च चरबी; मध्यम उत्पादन.",
            gu: "મૂળ: ગુજરાત. ઊંચી ચરબી; મધ્યમ ઉત્પાદન.",
        },
        image: "assets/surti.webp",
        milk_yield: "8–10 L/day",
        traits: "Compact, high fat",
        companion: "Murrah",
        cost_range: "₹70,000–1,10,000",
    },
    BreedEntry {
        slug: "gir",
        kind: BreedKind::Cattle,
        name: LocalizedText {
            en: "Gir",
            hi: "गिर",
            mr: "गिर",
            gu: "ગીર",
        },
        description: LocalizedText {
            en: "Origin: Gujarat. High fat milk; hardy.",
            hi: "मूल: गुजरात। ऊंची वसा; कणखर।",
            mr: "मूळ: गुजरात. जास्त चरबी; कणखर.",
            gu: "મૂળ: ગુજરાત. ઊંચી ચરબી; કઠોર.",
        },
        image: "assets/gir.jpg",
        milk_yield: "12–20 L/day",
        traits: "High fat, disease resistant",
        companion: "Holstein",
        cost_range: "₹80,000–1,20,000",
    },
    BreedEntry {
        slug: "sahiwal",
        kind: BreedKind::Cattle,
        name: LocalizedText {
            en: "Sahiwal",
            hi: "साहीवाल",
            mr: "साहीवाल",
            gu: "સાહિવાલ",
        },
        description: LocalizedText {
            en: "Origin: Punjab. Excellent milch zebu.",
            hi: "मूल: पंजाब। उत्तम दुग्ध।",
            mr: "मूळ: पंजाब. उत्कृष्ट दूधाळ.",
            gu: "મૂળ: પંજાબ. ઉત્તમ દૂધાળ.",
        },
        image: "assets/sahiwal.jpg",
        milk_yield: "10–18 L/day",
        traits: "Good temperament; heat tolerant",
        companion: "Holstein",
        cost_range: "₹85,000–1,30,000",
    },
    BreedEntry {
        slug: "kankrej",
        kind: BreedKind::Cattle,
        name: LocalizedText {
            en: "Kankrej",
            hi: "कांकरेज",
            mr: "कांकरेज",
            gu: "કાંક્રેજ",
        },
        description: LocalizedText {
            en: "Origin: Gujarat/Rajasthan. Dual-purpose.",
            hi: "मूल: गुजरात/राजस्थान। दुहेरी उपयोग।",
            mr: "मूळ: गुजरात/राज. दुहेरी उपयोग.",
            gu: "મૂળ: ગુજરાત/રાજ. દ્વિહેતુ.",
        },
        image: "assets/kankreja.jpg",
        milk_yield: "8–12 L/day",
        traits: "Draught + dairy",
        companion: "Jersey",
        cost_range: "₹60,000–1,00,000",
    },
    BreedEntry {
        slug: "tharparkar",
        kind: BreedKind::Cattle,
        name: LocalizedText {
            en: "Tharparkar",
            hi: "थारपारकर",
            mr: "थारपारकर",
            gu: "થારપારકર",
        },
        description: LocalizedText {
            en: "Origin: Thar desert. Good dairy zebu.",
            hi: "मूल: थार। अच्छा दुग्ध।",
            mr: "मूळ: थार. चांगले दूध.",
            gu: "મૂળ: થાર. સારું દૂધ.",
        },
        image: "assets/tharparkar.jpg",
        milk_yield: "8–12 L/day",
        traits: "Heat tolerant",
        companion: "Holstein",
        cost_range: "₹70,000–1,10,000",
    },
    BreedEntry {
        slug: "red_sindhi",
        kind: BreedKind::Cattle,
        name: LocalizedText {
            en: "Red Sindhi",
            hi: "रेड सिंधी",
            mr: "रेड सिंधी",
            gu: "રેડ સિંધિ",
        },
        description: LocalizedText {
            en: "Origin: Sindh. Good milk and fat.",
            hi: "मूल: सिंध। अच्छा दूध/वसा।",
            mr: "मूळ: सिंध. चांगले दूध/चरबी.",
            gu: "મૂળ: સિંધ. સારું દૂધ/ચરબી.",
        },
        image: "assets/redsindhi.webp",
        milk_yield: "8–12 L/day",
        traits: "High fat; hardy",
        companion: "Jersey",
        cost_range: "₹65,000–1,00,000",
    },
    BreedEntry {
        slug: "rathi",
        kind: BreedKind::Cattle,
        name: LocalizedText {
            en: "Rathi",
            hi: "राठी",
            mr: "राठी",
            gu: "રાઠી",
        },
        description: LocalizedText {
            en: "Origin: Rajasthan. Adapted to arid zones.",
            hi: "मूल: राजस्थान। शुष्क अनुकूल।",
            mr: "मूळ: राजस्थान. कोरड्या भागात अनुकूल.",
            gu: "મૂળ: રાજસ્થાન. શુષ્ક અનુકૂળ.",
        },
        image: "assets/rathi.jpg",
        milk_yield: "6–10 L/day",
        traits: "Heat tolerant",
        companion: "Holstein",
        cost_range: "₹55,000–90,000",
    },
    BreedEntry {
        slug: "ongole",
        kind: BreedKind::Cattle,
        name: LocalizedText {
            en: "Ongole",
            hi: "ओंगोल",
            mr: "ओंगोले",
            gu: "ઓંગોલે",
        },
        description: LocalizedText {
            en: "Origin: Andhra Pradesh. Heavy draught.",
            hi: "मूल: आंध्र। भारी बैल।",
            mr: "मूळ: आंध्र. जड बैल.",
            gu: "મૂળ: આંધ્ર. ભારે બળદ.",
        },
        image: "assets/ongole.jpg",
        milk_yield: "3–5 L/day",
        traits: "Strong draught",
        companion: "Jersey",
        cost_range: "₹50,000–80,000",
    },
    BreedEntry {
        slug: "vechur",
        kind: BreedKind::Cattle,
        name: LocalizedText {
            en: "Vechur",
            hi: "वेचुर",
            mr: "वेचुर",
            gu: "વેચુર",
        },
        description: LocalizedText {
            en: "Origin: Kerala. Dwarf cattle; low input.",
            hi: "मूल: केरल। बौनी; कम खर्च।",
            mr: "मूळ: केरळ. बोने; कमी खर्च.",
            gu: "મૂળ: કેરળ. બૌને; ઓછું ખર્ચ.",
        },
        image: "assets/vechur.jpg",
        milk_yield: "2–3 L/day",
        traits: "Low input, hardy",
        companion: "Gir",
        cost_range: "₹40,000–70,000",
    },
    BreedEntry {
        slug: "jaffarabadi",
        kind: BreedKind::Buffalo,
        name: LocalizedText {
            en: "Jaffarabadi",
            hi: "जाफराबादी",
            mr: "जाफराबादी",
            gu: "જાફરાબાદી",
        },
        description: LocalizedText {
            en: "Origin: Gujarat. Large buffalo; high fat.",
            hi: "मूल: गुजरात। बड़ी भैंस; उच्च वसा।",
            mr: "मूळ: गुजरात. मोठी म्हैस; जास्त चरबी.",
            gu: "મૂળ: ગુજરાત. મોટી ભેંસ; ઊંચી ચરબી.",
        },
        image: "assets/jaffrabadi.jpg",
        milk_yield: "10–14 L/day",
        traits: "Robust; high fat",
        companion: "Surti",
        cost_range: "₹1,00,000–1,60,000",
    },
    BreedEntry {
        slug: "mehsana",
        kind: BreedKind::Buffalo,
        name: LocalizedText {
            en: "Mehsana",
            hi: "मेहसाणा",
            mr: "मेहसाणा",
            gu: "મેહસાણા",
        },
        description: LocalizedText {
            en: "Origin: Gujarat. Murrah×Surti type.",
            hi: "मूल: गुजरात। मुर्रा×सुरती।",
            mr: "मूळ: गुजरात. मुर्रा×सुरती.",
            gu: "મૂળ: ગુજરાત. મુર્રા×સુરતી.",
        },
        image: "assets/mehsana.jpg",
        milk_yield: "8–12 L/day",
        traits: "Good milk fat",
        companion: "Murrah",
        cost_range: "₹80,000–1,30,000",
    },
    BreedEntry {
        slug: "pandharpuri",
        kind: BreedKind::Buffalo,
        name: LocalizedText {
            en: "Pandharpuri",
            hi: "पंढरपुरी",
            mr: "पंढरपुरी",
            gu: "પંઢરપુરી",
        },
        description: LocalizedText {
            en: "Origin: Maharashtra. Long sickle horns.",
            hi: "मूल: महाराष्ट्र। लंबी सींग।",
            mr: "मूळ: महाराष्ट्र. लांब वाकडी शिंगे.",
            gu: "મૂળ: મહારાષ્ટ્ર. લાંબા શિંગડા.",
        },
        image: "assets/pandharpuri.jpg",
        milk_yield: "6–8 L/day",
        traits: "Adapted to dry zones",
        companion: "Murrah",
        cost_range: "₹70,000–1,00,000",
    },
    BreedEntry {
        slug: "nili_ravi",
        kind: BreedKind::Buffalo,
        name: LocalizedText {
            en: "Nili-Ravi",
            hi: "नीली-रवि",
            mr: "नीली-रवि",
            gu: "નીલી-રવિ",
        },
        description: LocalizedText {
            en: "Origin: Punjab. Elite milch buffalo.",
            hi: "मूल: पंजाब। उत्कृष्ठ दुग्ध।",
            mr: "मूळ: पंजाब. उत्कृष्ट दूधाळ.",
            gu: "મૂળ: પંજાબ. ઉત્તમ દૂધાળ.",
        },
        image: "assets/nilliravi.webp",
        milk_yield: "20–25 L/day",
        traits: "High yield; good fat",
        companion: "Murrah",
        cost_range: "₹1,00,000–1,50,000",
    },
];
