//! Built-in state-to-cities table
//!
//! Used when no external city-state reference file is available. Coverage is
//! best-effort: the lists favour airport cities and district headquarters and
//! make no claim to be exhaustive. When a city appears under more than one
//! state, the first listing wins when the table is inverted.

/// `(state key, cities)` pairs in inversion priority order
pub const BUILTIN_STATE_CITIES: &[(&str, &[&str])] = &[
    (
        "andhra pradesh",
        &[
            "amaravati", "visakhapatnam", "vijayawada", "guntur", "nellore", "kurnool",
            "rajahmundry", "tirupati", "kakinada", "kadapa", "anantapur", "eluru", "ongole",
            "kadiri", "hindupur", "proddatur", "bhimavaram", "gudivada", "rajampet",
            "tadepalligudem", "srikakulam", "anakapalle", "nandyal", "adoni", "chittoor",
            "machilipatnam", "bapatla", "nagari", "narsapur", "tanuku", "yemmiganur",
            "sullurpeta", "palacole", "parvathipuram", "ramachandrapuram", "samalkot",
            "sattenapalle", "tadpatri", "tiruvuru", "venkatagiri", "puttaparthi",
        ],
    ),
    (
        "arunachal pradesh",
        &[
            "itanagar", "naharlagun", "pasighat", "tawang", "bomdila", "tezu", "khonsa",
            "anini", "dambuk", "roing", "sagalee", "seppa", "bhalukpong", "changlang",
            "hawai", "jairampur", "koloriang", "namsai", "pangin", "ziro", "hollongi",
        ],
    ),
    (
        "assam",
        &[
            "dispur", "guwahati", "dibrugarh", "silchar", "tezpur", "jorhat", "nagaon",
            "tinsukia", "dhubri", "diphu", "north lakhimpur", "barpeta", "lakhimpur",
            "sibsagar", "goalpara", "hailakandi", "dhemaji", "teok", "lumding", "mangaldoi",
            "marigaon", "sadiya", "udalguri", "badarpur", "bilasipara", "morigaon", "tangla",
        ],
    ),
    (
        "bihar",
        &[
            "patna", "gaya", "bhagalpur", "muzaffarpur", "darbhanga", "begusarai", "chapra",
            "katihar", "munger", "purnia", "saharsa", "hajipur", "sasaram", "dehri", "nawada",
            "jamalpur", "sitamarhi", "danapur", "madhubani", "siwan", "chhapra", "araria",
            "kishanganj", "madhepura", "arrah", "mokama", "sultanganj", "raxaul",
        ],
    ),
    (
        "chhattisgarh",
        &[
            "raipur", "bhilai", "durg", "korba", "bilaspur", "raigarh", "jagdalpur",
            "rajnandgaon", "ambikapur", "dhamtari", "chirmiri", "bhatapara", "sakti",
            "jashpur", "mahasamund", "dantewada", "narayanpur", "kanker", "kondagaon",
            "sukma", "balod", "baloda bazar", "bemetara", "gariaband", "kabirdham",
        ],
    ),
    (
        "goa",
        &[
            "panaji", "margao", "mapusa", "mormugao", "vasco da gama", "bicholim", "ponda",
            "sanguem", "canacona", "quepem", "salcette", "cortalim", "cuncolim", "majorda",
            "goa",
        ],
    ),
    (
        "gujarat",
        &[
            "gandhinagar", "ahmedabad", "surat", "vadodara", "rajkot", "bhavnagar",
            "jamnagar", "nadiad", "veraval", "gandhidham", "bharuch", "junagadh", "bhuj",
            "navsari", "botad", "dahod", "dwarka", "porbandar", "kandla", "keshod", "kheda",
            "mehsana", "morbi", "patan", "surendranagar", "valsad", "anand",
        ],
    ),
    (
        "haryana",
        &[
            "faridabad", "gurgaon", "hisar", "rohtak", "panipat", "karnal", "sonipat",
            "yamunanagar", "bhiwani", "sirsa", "bahadurgarh", "jind", "thanesar", "kaithal",
            "palwal", "bawal", "charkhi dadri", "fatehabad", "gohana", "jagadhri", "kalka",
            "meham", "narwana", "narnaul", "panchkula", "pundri", "radaur", "safidon",
            "shahbad", "ambala", "kurukshetra", "rewari",
        ],
    ),
    (
        "himachal pradesh",
        &[
            "shimla", "mandi", "solan", "nahan", "kullu", "manali", "bhuntar", "dharamshala",
            "gaggal", "kangra", "palampur", "baddi", "nagrota", "una", "chamba", "kinnaur",
            "hamirpur",
        ],
    ),
    (
        "jharkhand",
        &[
            "ranchi", "jamshedpur", "dhanbad", "bokaro", "hazaribagh", "giridih", "deoghar",
            "chaibasa", "chatra", "dumka", "gumla", "pakur", "sahebganj", "simdega",
            "palamu", "latehar", "khunti", "madhupur", "mihijam", "lohardaga",
        ],
    ),
    (
        "karnataka",
        &[
            "bengaluru", "mysore", "mangalore", "hubli", "dharwad", "davanagere", "belgaum",
            "gulbarga", "bellary", "vijayapura", "shimoga", "tumkur", "mandya", "gadag",
            "raichur", "hassan", "chitradurga", "kolar", "udupi", "hospet", "bhatkal",
            "gokak", "madikeri", "ranibennur", "tarikere", "bidar", "karwar",
        ],
    ),
    (
        "kerala",
        &[
            "thiruvananthapuram", "kochi", "ernakulam", "kollam", "kottayam", "palakkad",
            "alappuzha", "thrissur", "kannur", "kozhikode", "malappuram", "wayanad",
            "kasaragod", "pathanamthitta", "idukki", "munnar",
        ],
    ),
    (
        "madhya pradesh",
        &[
            "bhopal", "indore", "jabalpur", "gwalior", "ujjain", "sagar", "dewas", "satna",
            "rewa", "morena", "hoshangabad", "bhind", "damoh", "khargone", "mandsaur",
            "neemuch", "shahdol", "chhindwara", "guna", "tikamgarh", "sehore",
            "ashoknagar", "shajapur", "seoni", "khajuraho", "datia",
        ],
    ),
    (
        "maharashtra",
        &[
            "mumbai", "navi mumbai", "pune", "nagpur", "nashik", "aurangabad",
            "chhatrapati sambhajinagar", "solapur", "thane", "jalgaon", "kolhapur",
            "amravati", "latur", "sangli", "nanded", "satara", "akola", "parbhani",
            "malegaon", "osmanabad", "nandurbar", "ahmednagar", "chandrapur", "dhule",
            "gondia", "hinganghat", "jalna", "khamgaon", "khopoli", "shirdi", "ratnagiri",
            "sindhudurg",
        ],
    ),
    (
        "manipur",
        &[
            "imphal", "thoubal", "bishnupur", "churachandpur", "senapati", "tamenglong",
            "ukhrul", "kakching", "kangpokpi", "noney", "tengnoupal",
        ],
    ),
    (
        "meghalaya",
        &[
            "shillong", "umroi", "tura", "jowai", "nongstoin", "baghmara", "resubelpara",
            "williamnagar", "cherrapunji", "mairang", "mawkyrwat", "sohra", "nongpoh",
        ],
    ),
    (
        "mizoram",
        &[
            "aizawl", "lengpui", "lunglei", "champhai", "kolasib", "serchhip", "mamit",
            "saiha", "thenzawl",
        ],
    ),
    (
        "nagaland",
        &[
            "kohima", "dimapur", "mokokchung", "tuensang", "wokha", "zunheboto", "mon",
            "phek", "kiphire", "longleng",
        ],
    ),
    (
        "odisha",
        &[
            "bhubaneswar", "cuttack", "rourkela", "sambalpur", "berhampur", "puri",
            "balasore", "bhadrak", "baripada", "kendrapara", "anugul", "bargarh",
            "baleshwar", "balangir", "boudh", "bhawanipatna", "dhenkanal", "jagatsinghpur",
            "jajpur", "jharsuguda", "kendujhar", "koraput", "jeypore", "malkangiri",
            "nabarangpur", "nayagarh", "nuapada", "phulbani", "rayagada", "sundargarh",
        ],
    ),
    (
        "punjab",
        &[
            "ludhiana", "amritsar", "jalandhar", "adampur", "patiala", "bathinda",
            "hoshiarpur", "moga", "mohali", "firozpur", "malerkotla", "gobindgarh", "khanna",
            "fatehgarh sahib", "sangrur", "sunam", "dhuri", "zira", "fazilka", "kharar",
            "rajpura", "sirhind", "barnala", "jagraon", "kotkapura", "muktsar", "phagwara",
            "pathankot", "gurdaspur", "kapurthala", "rupnagar", "sas nagar",
            "sri muktsar sahib", "chandigarh",
        ],
    ),
    (
        "rajasthan",
        &[
            "jaipur", "jodhpur", "kota", "bikaner", "ajmer", "kishangarh", "bhilwara",
            "alwar", "sikar", "sawai madhopur", "pali", "ganganagar", "sri ganganagar",
            "bharatpur", "barmer", "tonk", "chittorgarh", "dungarpur", "banswara",
            "dholpur", "karauli", "pratapgarh", "rajsamand", "udaipur", "hanumangarh",
            "jaisalmer", "jalore", "jhalawar", "jhunjhunu", "nagaur", "sirohi",
        ],
    ),
    (
        "sikkim",
        &[
            "gangtok", "pakyong", "namchi", "gyalshing", "mangan", "soreng", "rhenock",
        ],
    ),
    (
        "tamil nadu",
        &[
            "chennai", "coimbatore", "madurai", "tiruchirappalli", "salem", "tirunelveli",
            "tiruppur", "vellore", "thoothukudi", "erode", "tiruvannamalai", "pollachi",
            "rajapalayam", "ramanathapuram", "kanchipuram", "nagercoil", "dindigul",
            "karur", "nagapattinam", "kovilpatti", "karaikudi", "vaniyambadi", "sivakasi",
            "tiruchengode", "tirupattur", "ranipet", "tindivanam", "udumalaipettai",
            "virudhachalam", "virudhunagar", "thanjavur", "udhagamandalam", "hosur",
        ],
    ),
    (
        "telangana",
        &[
            "hyderabad", "warangal", "nizamabad", "karimnagar", "ramagundam", "khammam",
            "mahbubnagar", "nalgonda", "suryapet", "miryalaguda", "siddipet", "adilabad",
            "sangareddy", "sircilla", "peddapalli", "bodhan", "mancherial", "kamareddy",
            "nirmal", "jagtial",
        ],
    ),
    (
        "tripura",
        &[
            "agartala", "dharmanagar", "kailasahar", "belonia", "khowai", "ambassa",
            "sabroom",
        ],
    ),
    (
        "uttar pradesh",
        &[
            "lucknow", "kanpur", "agra", "varanasi", "meerut", "allahabad", "gorakhpur",
            "noida", "greater noida", "ghaziabad", "bareilly", "aligarh", "saharanpur",
            "mathura", "firozabad", "muzaffarnagar", "moradabad", "ayodhya", "jhansi",
            "kushinagar", "hindon",
        ],
    ),
    (
        "uttarakhand",
        &[
            "dehradun", "jolly grant", "haridwar", "hardwar", "rishikesh", "haldwani",
            "kathgodam", "kashipur", "rudrapur", "pantnagar", "khatima", "sitarganj",
            "jaspur", "pauri", "chakrata", "chamoli", "devprayag", "gangotri", "gauchar",
            "gaurikund", "guptkashi", "joshimath", "karnaprayag", "kotdwar", "laksar",
            "lalkuan", "lansdowne", "mukteshwar", "nainital", "pithoragarh", "ranikhet",
            "roorkee", "rudraprayag", "uttarkashi", "vikasnagar", "yamunotri",
        ],
    ),
    (
        "west bengal",
        &[
            "kolkata", "siliguri", "bagdogra", "durgapur", "asansol", "malda", "raiganj",
            "kharagpur", "jalpaiguri", "cooch behar", "bankura", "darjeeling",
            "krishnanagar", "berhampore", "bally", "budge budge", "dhulian", "dankuni",
            "haldia", "kulti", "kamarhati", "medinipur", "nabadwip", "purulia",
            "shantipur", "suri", "tamluk", "alipurduar", "howrah",
        ],
    ),
    (
        "delhi",
        &[
            "delhi", "new delhi", "north delhi", "south delhi", "east delhi", "west delhi",
            "central delhi", "north west delhi", "south west delhi", "north east delhi",
            "shahdara", "palam", "rohini", "pitampura", "karol bagh", "connaught place",
            "defence colony", "greater kailash", "hauz khas", "karkardooma", "lajpat nagar",
            "mayur vihar", "narela", "pandav nagar", "paschim vihar", "rajouri garden",
            "saket", "vasant kunj", "vishwas nagar", "yamuna vihar",
        ],
    ),
    (
        "puducherry",
        &[
            "puducherry", "pondicherry", "karaikal", "mahe", "yanam", "yanaon",
            "oussudu", "kannigapuram", "thattanchavady", "mannadipet", "mudaliarpet",
        ],
    ),
    (
        "andaman and nicobar islands",
        &[
            "port blair", "car nicobar", "havelock island", "swaraj dweep", "neil island",
            "shaheed dweep", "little andaman", "nancowry", "katchal", "south andaman",
            "north and middle andaman", "ross island", "viper island", "diglipur",
            "mayabunder", "rangat",
        ],
    ),
    (
        "dadra and nagar haveli and daman and diu",
        &[
            "daman", "diu", "silvassa", "dadra", "nagar haveli", "dnh", "dnh and dd",
        ],
    ),
    (
        "lakshadweep",
        &[
            "kavaratti", "agatti", "andrott", "bitra", "chetlat", "kadmat", "kalpeni",
            "kiltan", "minicoy", "amini",
        ],
    ),
    (
        "ladakh",
        &[
            "leh", "kargil", "drass", "padum", "zanskar", "nubra", "pangong", "nyoma",
            "changthang", "diskit",
        ],
    ),
];
