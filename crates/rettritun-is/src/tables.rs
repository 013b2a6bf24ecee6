// Static correction lookup tables for Icelandic.
//
// Three immutable tables drive all token-level rewrites: word forms
// that may legitimately repeat, words erroneously written as one
// compound together with their correct split, and word pairs
// erroneously written apart together with their joined spelling. The
// hash tables are built once on first use and live for the process
// lifetime; nothing ever writes to them, so they are safe to share
// across any number of correction streams.
//
// The entries are dictionary data curated by hand and carried verbatim,
// historical oddities included. No disjointness is enforced between the
// tables; the rule priority order in `rules` resolves any overlap.

use std::sync::LazyLock;

use hashbrown::{HashMap, HashSet};

/// Lowercase word forms that legitimately appear twice in a row.
static ALLOWED_MULTIPLES_DATA: &[&str] = &[
    "af", "auður", "að", "bannið", "bara", "bæði", "efni", "eftir", "eftir ", "eigi", "eigum",
    "eins", "ekki", "er", "er ", "falla", "fallið", "ferð", "festi", "flokkar", "flæði", "formið",
    "fram", "framan", "frá", "fylgi", "fyrir", "fyrir ", "fá", "gegn", "gerði", "getum", "hafa",
    "hafi", "hafið", "haft", "halla", "heim", "hekla", "heldur", "helga", "helgi", "hita", "hjá",
    "hjólum", "hlaupið", "hrætt", "hvort", "hæli", "inn ", "inni", "kanna", "kaupa", "kemba",
    "kira", "koma", "kæra", "lagi", "lagið", "leik", "leikur", "leið", "liðið", "lækna", "lögum",
    "löngu", "manni", "með", "milli", "minnst", "mun", "myndir", "málið", "móti", "mörkum",
    "neðan", "niðri", "niður", "niður ", "næst", "ofan", "opnir", "orðin", "rennur", "reynir",
    "riðlar", "riðli", "ráðum", "rétt", "safnið", "sem", "sett", "skipið", "skráðir", "spenna",
    "standa", "stofna", "streymi", "strokið", "stundum", "svala", "sæti", "sé", "sér", "síðan",
    "sótt", "sýna", "talið", "til", "tíma", "um", "undan", "undir", "upp", "upp ", "valda",
    "vanda", "var", "vega", "veikir", "vel", "velta", "vera", "verið", "vernda", "verða", "verði",
    "verður", "veður", "vikum", "við", "væri", "yfir", "yrði", "á", "á ", "átta", "í", "í ", "ó",
    "ómar", "úr", "út", "út ", "úti", "úti ", "þegar", "þjóna",
];

/// Words erroneously written as one word, with the correct split.
static NOT_COMPOUNDS_DATA: &[(&str, &[&str])] = &[
    ("afhverju", &["af", "hverju"]),
    ("aftanfrá", &["aftan", "frá"]),
    ("afturábak", &["aftur", "á", "bak"]),
    ("afturí", &["aftur", "í"]),
    ("afturúr", &["aftur", "úr"]),
    ("afþví", &["af", "því"]),
    ("afþvíað", &["af", "því", "að"]),
    ("allajafna", &["alla", "jafna"]),
    ("allajafnan", &["alla", "jafnan"]),
    ("allrabest", &["allra", "best"]),
    ("allrafyrst", &["allra", "fyrst"]),
    ("allsekki", &["alls", "ekki"]),
    ("allskonar", &["alls", "konar"]),
    ("allskostar", &["alls", "kostar"]),
    ("allskyns", &["alls", "kyns"]),
    ("allsstaðar", &["alls", "staðar"]),
    ("allstaðar", &["alls", "staðar"]),
    ("alltsaman", &["allt", "saman"]),
    ("alltíeinu", &["allt", "í", "einu"]),
    ("alskonar", &["alls", "konar"]),
    ("alskyns", &["alls", "kyns"]),
    ("alstaðar", &["alls", "staðar"]),
    ("annarhver", &["annar", "hver"]),
    ("annarhvor", &["annar", "hvor"]),
    ("annarskonar", &["annars", "konar"]),
    ("annarslags", &["annars", "lags"]),
    ("annarsstaðar", &["annars", "staðar"]),
    ("annarstaðar", &["annars", "staðar"]),
    ("annarsvegar", &["annars", "vegar"]),
    ("annartveggja", &["annar", "tveggja"]),
    ("annaðslagið", &["annað", "slagið"]),
    ("austanfrá", &["austan", "frá"]),
    ("austanmegin", &["austan", "megin"]),
    ("austantil", &["austan", "til"]),
    ("austureftir", &["austur", "eftir"]),
    ("austurfrá", &["austur", "frá"]),
    ("austurfyrir", &["austur", "fyrir"]),
    ("bakatil", &["baka", "til"]),
    ("báðumegin", &["báðum", "megin"]),
    ("eftirað", &["eftir", "að"]),
    ("eftirá", &["eftir", "á"]),
    ("einhverjusinni", &["einhverju", "sinni"]),
    ("einhverntíma", &["einhvern", "tíma"]),
    ("einhverntímann", &["einhvern", "tímann"]),
    ("einhvernveginn", &["einhvern", "veginn"]),
    ("einhverskonar", &["einhvers", "konar"]),
    ("einhversstaðar", &["einhvers", "staðar"]),
    ("einhverstaðar", &["einhvers", "staðar"]),
    ("einskisvirði", &["einskis", "virði"]),
    ("einskonar", &["eins", "konar"]),
    ("einsog", &["eins", "og"]),
    ("einusinni", &["einu", "sinni"]),
    ("eittsinn", &["eitt", "sinn"]),
    ("endaþótt", &["enda", "þótt"]),
    ("enganveginn", &["engan", "veginn"]),
    ("ennfrekar", &["enn", "frekar"]),
    ("ennfremur", &["enn", "fremur"]),
    ("ennþá", &["enn", "þá"]),
    ("fimmhundruð", &["fimm", "hundruð"]),
    ("fimmtuhlutar", &["fimmtu", "hlutar"]),
    ("fjórðuhlutar", &["fjórðu", "hlutar"]),
    ("fjögurhundruð", &["fjögur", "hundruð"]),
    ("framaf", &["fram", "af"]),
    ("framanaf", &["framan", "af"]),
    ("frameftir", &["fram", "eftir"]),
    ("framhjá", &["fram", "hjá"]),
    ("frammí", &["frammi", "í"]),
    ("framundan", &["fram", "undan"]),
    ("framundir", &["fram", "undir"]),
    ("framvið", &["fram", "við"]),
    ("framyfir", &["fram", "yfir"]),
    ("framá", &["fram", "á"]),
    ("framávið", &["fram", "á", "við"]),
    ("framúr", &["fram", "úr"]),
    ("fulltaf", &["fullt", "af"]),
    ("fyrirfram", &["fyrir", "fram"]),
    ("fyrren", &["fyrr", "en"]),
    ("fyrripartur", &["fyrr", "partur"]),
    ("heilshugar", &["heils", "hugar"]),
    ("helduren", &["heldur", "en"]),
    ("hinsvegar", &["hins", "vegar"]),
    ("hinumegin", &["hinum", "megin"]),
    ("hvarsem", &["hvar", "sem"]),
    ("hvaðaner", &["hvaðan", "er"]),
    ("hvaðansem", &["hvaðan", "sem"]),
    ("hvaðeina", &["hvað", "eina"]),
    ("hverjusinni", &["hverju", "sinni"]),
    ("hverskonar", &["hvers", "konar"]),
    ("hverskyns", &["hvers", "kyns"]),
    ("hversvegna", &["hvers", "vegna"]),
    ("hvertsem", &["hvert", "sem"]),
    ("hvortannað", &["hvort", "annað"]),
    ("hvorteðer", &["hvort", "eð", "er"]),
    ("hvortveggja", &["hvort", "tveggja"]),
    ("héreftir", &["hér", "eftir"]),
    ("hérmeð", &["hér", "með"]),
    ("hérnamegin", &["hérna", "megin"]),
    ("hérumbil", &["hér", "um", "bil"]),
    ("innanfrá", &["innan", "frá"]),
    ("innanum", &["innan", "um"]),
    ("inneftir", &["inn", "eftir"]),
    ("innivið", &["inni", "við"]),
    ("innvið", &["inn", "við"]),
    ("inná", &["inn", "á"]),
    ("innávið", &["inn", "á", "við"]),
    ("inní", &["inn", "í"]),
    ("innúr", &["inn", "úr"]),
    ("lítilsháttar", &["lítils", "háttar"]),
    ("margskonar", &["margs", "konar"]),
    ("margskyns", &["margs", "kyns"]),
    ("meirasegja", &["meira", "að", "segja"]),
    ("meiraðsegja", &["meira", "að", "segja"]),
    ("meiriháttar", &["meiri", "háttar"]),
    ("meðþvíað", &["með", "því", "að"]),
    ("mikilsháttar", &["mikils", "háttar"]),
    ("minniháttar", &["minni", "háttar"]),
    ("minnstakosti", &["minnsta", "kosti"]),
    ("mörghundruð", &["mörg", "hundruð"]),
    ("neinsstaðar", &["neins", "staðar"]),
    ("neinstaðar", &["neins", "staðar"]),
    ("niðreftir", &["niður", "eftir"]),
    ("niðrá", &["niður", "á"]),
    ("niðrí", &["niður", "á"]),
    ("niðureftir", &["niður", "eftir"]),
    ("niðurfrá", &["niður", "frá"]),
    ("niðurfyrir", &["niður", "fyrir"]),
    ("niðurá", &["niður", "á"]),
    ("niðurávið", &["niður", "á", "við"]),
    ("nokkrusinni", &["nokkru", "sinni"]),
    ("nokkurntíma", &["nokkurn", "tíma"]),
    ("nokkurntímann", &["nokkurn", "tímann"]),
    ("nokkurnveginn", &["nokkurn", "veginn"]),
    ("nokkurskonar", &["nokkurs", "konar"]),
    ("nokkursstaðar", &["nokkurs", "staðar"]),
    ("nokkurstaðar", &["nokkurs", "staðar"]),
    ("norðanfrá", &["norðan", "frá"]),
    ("norðanmegin", &["norðan", "megin"]),
    ("norðantil", &["norðan", "til"]),
    ("norðaustantil", &["norðaustan", "til"]),
    ("norðureftir", &["norður", "eftir"]),
    ("norðurfrá", &["norður", "frá"]),
    ("norðurúr", &["norður", "úr"]),
    ("norðvestantil", &["norðvestan", "til"]),
    ("norðvesturtil", &["norðvestur", "til"]),
    ("níuhundruð", &["níu", "hundruð"]),
    ("núþegar", &["nú", "þegar"]),
    ("ofanaf", &["ofan", "af"]),
    ("ofaná", &["ofan", "á"]),
    ("ofaní", &["ofan", "í"]),
    ("ofanúr", &["ofan", "úr"]),
    ("oní", &["ofan", "í"]),
    ("réttumegin", &["réttum", "megin"]),
    ("réttummegin", &["réttum", "megin"]),
    ("samskonar", &["sams", "konar"]),
    ("seinnipartur", &["seinni", "partur"]),
    ("semsagt", &["sem", "sagt"]),
    ("sexhundruð", &["sex", "hundruð"]),
    ("sigrihrósandi", &["sigri", "hrósandi"]),
    ("sjöhundruð", &["sjö", "hundruð"]),
    ("sjöttuhlutar", &["sjöttu", "hlutar"]),
    ("smámsaman", &["smám", "saman"]),
    ("sumsstaðar", &["sums", "staðar"]),
    ("sumstaðar", &["sums", "staðar"]),
    ("sunnanað", &["sunnan", "að"]),
    ("sunnanmegin", &["sunnan", "megin"]),
    ("sunnantil", &["sunnan", "til"]),
    ("sunnanvið", &["sunnan", "við"]),
    ("suðaustantil", &["suðaustan", "til"]),
    ("suðuraf", &["suður", "af"]),
    ("suðureftir", &["suður", "eftir"]),
    ("suðurfrá", &["suður", "frá"]),
    ("suðurfyrir", &["suður", "fyrir"]),
    ("suðurí", &["suður", "í"]),
    ("suðvestantil", &["suðvestan", "til"]),
    ("svoað", &["svo", "að"]),
    ("svokallaður", &["svo", "kallaður"]),
    ("svosem", &["svo", "sem"]),
    ("svosemeins", &["svo", "sem", "eins"]),
    ("svotil", &["svo", "til"]),
    ("tilbaka", &["til", "baka"]),
    ("tilþessað", &["til", "þess", "að"]),
    ("tvennskonar", &["tvenns", "konar"]),
    ("tvöhundruð", &["tvö", "hundruð"]),
    ("tvöþúsund", &["tvö", "þúsund"]),
    ("umfram", &["um", "fram"]),
    ("undanúr", &["undan", "úr"]),
    ("undireins", &["undir", "eins"]),
    ("uppaf", &["upp", "af"]),
    ("uppað", &["upp", "að"]),
    ("uppeftir", &["upp", "eftir"]),
    ("uppfrá", &["upp", "frá"]),
    ("uppundir", &["upp", "undir"]),
    ("uppá", &["upp", "á"]),
    ("uppávið", &["upp", "á", "við"]),
    ("uppí", &["upp", "í"]),
    ("uppúr", &["upp", "úr"]),
    ("utanaf", &["utan", "af"]),
    ("utanað", &["utan", "að"]),
    ("utanfrá", &["utan", "frá"]),
    ("utanmeð", &["utan", "með"]),
    ("utanum", &["utan", "um"]),
    ("utanundir", &["utan", "undir"]),
    ("utanvið", &["utan", "við"]),
    ("utaná", &["utan", "á"]),
    ("vegnaþess", &["vegna", "þess"]),
    ("vestantil", &["vestan", "til"]),
    ("vestureftir", &["vestur", "eftir"]),
    ("vesturyfir", &["vestur", "yfir"]),
    ("vesturúr", &["vestur", "úr"]),
    ("vitlausumegin", &["vitlausum", "megin"]),
    ("viðkemur", &["við", "kemur"]),
    ("viðkom", &["við", "kom"]),
    ("viðkæmi", &["við", "kæmi"]),
    ("viðkæmum", &["við", "kæmum"]),
    ("víðsfjarri", &["víðs", "fjarri"]),
    ("víðsvegar", &["víðs", "vegar"]),
    ("yfirum", &["yfir", "um"]),
    ("ámeðal", &["á", "meðal"]),
    ("ámilli", &["á", "milli"]),
    ("áttahundruð", &["átta", "hundruð"]),
    ("áðuren", &["áður", "en"]),
    ("öðruhverju", &["öðru", "hverju"]),
    ("öðruhvoru", &["öðru", "hvoru"]),
    ("öðrumegin", &["öðrum", "megin"]),
    ("úrþvíað", &["úr", "því", "að"]),
    ("útaf", &["út", "af"]),
    ("útfrá", &["út", "frá"]),
    ("útfyrir", &["út", "fyrir"]),
    ("útifyrir", &["út", "fyrir"]),
    ("útivið", &["út", "við"]),
    ("útundan", &["út", "undan"]),
    ("útvið", &["út", "við"]),
    ("útá", &["út", "á"]),
    ("útávið", &["út", "á", "við"]),
    ("útí", &["út", "í"]),
    ("útúr", &["út", "úr"]),
    ("ýmiskonar", &["ýmiss", "konar"]),
    ("ýmisskonar", &["ýmiss", "konar"]),
    ("þangaðsem", &["þangað", "sem"]),
    ("þarafleiðandi", &["þar", "af", "leiðandi"]),
    ("þaraðauki", &["þar", "að", "auki"]),
    ("þareð", &["þar", "eð"]),
    ("þarmeð", &["þar", "með"]),
    ("þarsem", &["þar", "sem"]),
    ("þarsíðasta", &["þar", "síðasta"]),
    ("þarsíðustu", &["þar", "síðustu"]),
    ("þartilgerður", &["þar", "til", "gerður"]),
    ("þeimegin", &["þeim", "megin"]),
    ("þeimmegin", &["þeim", "megin"]),
    ("þessháttar", &["þess", "háttar"]),
    ("þesskonar", &["þess", "konar"]),
    ("þesskyns", &["þess", "kyns"]),
    ("þessvegna", &["þess", "vegna"]),
    ("þriðjuhlutar", &["þriðju", "hlutar"]),
    ("þrjúhundruð", &["þrjú", "hundruð"]),
    ("þrjúþúsund", &["þrjú", "þúsund"]),
    ("þvíað", &["því", "að"]),
    ("þvínæst", &["því", "næst"]),
    ("þínmegin", &["þín", "megin"]),
    ("þóað", &["þó", "að"]),
];

/// Word pairs erroneously written apart, with the joined spelling.
static SPLIT_COMPOUNDS_DATA: &[(&str, &str, &str)] = &[
    ("afbragðs", "fagur", "afbragðsfagur"),
    ("afbragðs", "góður", "afbragðsgóður"),
    ("afbragðs", "maður", "afbragðsmaður"),
    ("afburða", "árangur", "afburðaárangur"),
    ("aftaka", "veður", "aftakaveður"),
    ("al", "góður", "algóður"),
    ("all", "góður", "allgóður"),
    ("allsherjar", "atkvæðagreiðsla", "allsherjaratkvæðagreiðsla"),
    ("allsherjar", "breyting", "allsherjarbreyting"),
    ("allsherjar", "neyðarútkall", "allsherjarneyðarútkall"),
    ("and", "stæðingur", "andstæðingur"),
    ("auka", "herbergi", "aukaherbergi"),
    ("auð", "sveipur", "auðsveipur"),
    ("aðal", "inngangur", "aðalinngangur"),
    ("aðaldyra", "megin", "aðaldyramegin"),
    ("bakborðs", "megin", "bakborðsmegin"),
    ("bakdyra", "megin", "bakdyramegin"),
    ("blæja", "logn", "blæjalogn"),
    ("brekku", "megin", "brekkumegin"),
    ("bílstjóra", "megin", "bílstjóramegin"),
    ("einskis", "verður", "einskisverður"),
    ("endur", "úthluta", "endurúthluta"),
    ("farþega", "megin", "farþegamegin"),
    ("fjölda", "margir", "fjöldamargir"),
    ("for", "maður", "formaður"),
    ("forkunnar", "fagir", "forkunnarfagur"),
    ("frum", "stæður", "frumstæður"),
    ("full", "mikill", "fullmikill"),
    ("furðu", "góður", "furðugóður"),
    ("gagn", "stæður", "gagnstæður"),
    ("gegn", "drepa", "gegndrepa"),
    ("ger", "breyta", "gerbreyta"),
    ("gjalda", "megin", "gjaldamegin"),
    ("gjör", "breyta", "gjörbreyta"),
    ("heildar", "staða", "heildarstaða"),
    ("hlé", "megin", "hlémegin"),
    ("hálf", "undarlegur", "hálfundarlegur"),
    ("hálfs", "mánaðarlega", "hálfsmánaðarlega"),
    ("hálftíma", "gangur", "hálftímagangur"),
    ("innvortis", "blæðing", "innvortisblæðing"),
    ("jafn", "framt", "jafnframt"),
    ("jafn", "lyndur", "jafnlyndur"),
    ("jafn", "vægi", "jafnvægi"),
    ("karla", "megin", "karlamegin"),
    ("klukkustundar", "frestur", "klukkustundarfrestur"),
    ("kring", "um", "kringum"),
    ("kvenna", "megin", "kvennamegin"),
    ("lang", "stærstur", "langstærstur"),
    ("langtíma", "aukaverkun", "langtímaaukaverkun"),
    ("langtíma", "lán", "langtímalán"),
    ("langtíma", "markmið", "langtímamarkmið"),
    ("langtíma", "skuld", "langtímaskuld"),
    ("langtíma", "sparnaður", "langtímasparnaður"),
    ("langtíma", "spá", "langtímaspá"),
    ("langtíma", "stefnumörkun", "langtímastefnumörkun"),
    ("langtíma", "þróun", "langtímaþróun"),
    ("lágmarks", "aldur", "lágmarksaldur"),
    ("lágmarks", "fjöldi", "lágmarksfjöldi"),
    ("lágmarks", "gjald", "lágmarksgjald"),
    ("lágmarks", "kurteisi", "lágmarkskurteisi"),
    ("lágmarks", "menntun", "lágmarksmenntun"),
    ("lágmarks", "stærð", "lágmarksstærð"),
    ("lágmarks", "áhætta", "lágmarksáhætta"),
    ("lítils", "verður", "lítilsverður"),
    ("marg", "oft", "margoft"),
    ("megin", "atriði", "meginatriði"),
    ("megin", "forsenda", "meginforsenda"),
    ("megin", "land", "meginland"),
    ("megin", "markmið", "meginmarkmið"),
    ("megin", "orsök", "meginorsök"),
    ("megin", "regla", "meginregla"),
    ("megin", "tilgangur", "megintilgangur"),
    ("megin", "uppistaða", "meginuppistaða "),
    ("megin", "viðfangsefni", "meginviðfangsefni"),
    ("megin", "ágreiningur", "meginágreiningur"),
    ("megin", "ákvörðun", "meginákvörðun"),
    ("megin", "áveitukerfi", "megináveitukerfi"),
    ("mest", "allt", "mestallt"),
    ("mest", "allur", "mestallur"),
    ("meðal", "aðgengi", "meðalaðgengi"),
    ("meðal", "biðtími", "meðalbiðtími"),
    ("meðal", "ævilengd", "meðalævilengd"),
    ("mis", "bjóða", "misbjóða"),
    ("mis", "breiður", "misbreiður"),
    ("mis", "heppnaður", "misheppnaður"),
    ("mis", "lengi", "mislengi"),
    ("mis", "mikið", "mismikið"),
    ("mis", "stíga", "misstíga"),
    ("miðlungs", "beiskja", "miðlungsbeiskja"),
    ("myndar", "drengur", "myndardrengur"),
    ("næst", "bestur", "næstbestur"),
    ("næst", "komandi", "næstkomandi"),
    ("næst", "síðastur", "næstsíðastur"),
    ("næst", "verstur", "næstverstur"),
    ("sam", "skeyti", "samskeyti"),
    ("saman", "stendur", "samanstendur"),
    ("sjávar", "megin", "sjávarmegin"),
    ("skammtíma", "skuld", "skammtímaskuld"),
    ("skammtíma", "vistun", "skammtímavistun"),
    ("svo", "kallaður", "svokallaður"),
    ("sér", "framboð", "sérframboð"),
    ("sér", "herbergi", "sérherbergi"),
    ("sér", "inngangur", "sérinngangur"),
    ("sér", "kennari", "sérkennari"),
    ("sér", "staða", "sérstaða"),
    ("sér", "stæði", "sérstæði"),
    ("sér", "vitringur", "sérvitringur"),
    ("sér", "íslenskur", "séríslenskur"),
    ("sér", "þekking", "sérþekking"),
    ("sér", "þvottahús", "sérþvottahús"),
    ("sí", "felldur", "sífelldur"),
    ("sólar", "megin", "sólarmegin"),
    ("tor", "læs", "torlæs"),
    ("undra", "góður", "undragóður"),
    ("uppáhalds", "bragðtegund", "uppáhaldsbragðtegund"),
    ("uppáhalds", "fag", "uppáhaldsfag"),
    ("van", "megnugur", "vanmegnugur"),
    ("van", "virða", "vanvirða"),
    ("vel", "ferð", "velferð"),
    ("vel", "kominn", "velkominn"),
    ("vel", "megun", "velmegun"),
    ("vel", "vild", "velvild"),
    ("ágætis", "maður", "ágætismaður"),
    ("áratuga", "reynsla", "áratugareynsla"),
    ("áratuga", "skeið", "áratugaskeið"),
    ("óhemju", "illa", "óhemjuilla"),
    ("óhemju", "vandaður", "óhemjuvandaður"),
    ("óskapa", "hiti", "óskapahiti"),
    ("óvenju", "góður", "óvenjugóður"),
    ("önd", "verður", "öndverður"),
    ("ör", "magna", "örmagna"),
    ("úrvals", "hveiti", "úrvalshveiti"),
];

/// Word forms exempt from duplicate collapsing, keyed by lowercase form.
pub static ALLOWED_MULTIPLES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ALLOWED_MULTIPLES_DATA.iter().copied().collect());

/// Erroneously merged words: lowercase surface form to ordered
/// replacement parts.
pub static NOT_COMPOUNDS: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| NOT_COMPOUNDS_DATA.iter().copied().collect());

/// Erroneously split compounds: first surface form to a map from second
/// surface form to the joined spelling. Keys are case-sensitive; only
/// two-token merges exist.
pub static SPLIT_COMPOUNDS: LazyLock<HashMap<&'static str, HashMap<&'static str, &'static str>>> =
    LazyLock::new(|| {
        let mut map: HashMap<&'static str, HashMap<&'static str, &'static str>> = HashMap::new();
        for &(first, second, joined) in SPLIT_COMPOUNDS_DATA {
            map.entry(first).or_default().insert(second, joined);
        }
        map
    });

/// Check whether a lowercase word form may appear more than once in a
/// row without being collapsed.
pub fn is_allowed_multiple(lower: &str) -> bool {
    ALLOWED_MULTIPLES.contains(lower)
}

/// Look up the correct split for an erroneously merged word, by
/// lowercase surface form.
pub fn not_compound_parts(lower: &str) -> Option<&'static [&'static str]> {
    NOT_COMPOUNDS.get(lower).copied()
}

/// Look up the joined spelling for an erroneously split pair. The match
/// is exact and case-sensitive.
pub fn split_compound_join(first: &str, second: &str) -> Option<&'static str> {
    SPLIT_COMPOUNDS.get(first)?.get(second).copied()
}
