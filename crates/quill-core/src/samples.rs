//! Static sample gallery and prompt-comparison datasets. Pure data: these
//! records have the same shape as live generations so selecting one loads
//! its settings straight into the form.

use crate::params::{GenerationParams, Genre, Length, PieceType, Tone};
use crate::result::{GenerationResult, ResultMetadata};

fn sample(
    id: &str,
    title: &str,
    piece_type: PieceType,
    genre: Genre,
    tone: Tone,
    length: Length,
    content: &str,
    summary: &str,
) -> GenerationResult {
    let params = GenerationParams {
        piece_type: Some(piece_type),
        genre: Some(genre),
        tone: Some(tone),
        length: Some(length),
        custom_title: String::new(),
        custom_prompt: String::new(),
    };
    GenerationResult {
        id: id.into(),
        title: title.into(),
        content: content.into(),
        summary: summary.into(),
        metadata: ResultMetadata {
            params,
            piece_type,
            genre,
            tone,
            word_count: length,
            token_usage: None,
            generation_time: 0.0,
        },
    }
}

/// The click-to-load inspiration gallery.
pub fn gallery() -> Vec<GenerationResult> {
    vec![
        sample(
            "sample-1",
            "The Wizard's Grocery List",
            PieceType::Story,
            Genre::Fantasy,
            Tone::Humorous,
            Length::Short,
            "Elmsworth the Unfathomable had conquered lich-kings and out-riddled sphinxes, \
             but the corner shop defeated him utterly. The list said 'eye of newt', and the \
             shelf offered only 'essence of newt (sustainably sourced)'. He summoned a minor \
             demon for a second opinion. The demon read the label, shrugged, and recommended \
             the store brand.\n\nAt the till, the cashier asked if he had a loyalty card. \
             Elmsworth, who had once bargained with Death itself, paid full price and fled. \
             The lich-kings, he decided, had been easier. At least they never asked him if \
             he wanted a receipt.",
            "An archmage is humbled by the small print of modern shopping.",
        ),
        sample(
            "sample-2",
            "Tide Lines",
            PieceType::Poem,
            Genre::Romance,
            Tone::Inspirational,
            Length::Short,
            "The sea writes and rewrites the shore,\nnever once calling it a failure.\n\n\
             You and I are drafted that way too,\nedited nightly by the patient dark,\n\
             each morning a cleaner line,\neach year a truer sentence.\n\n\
             Love is not the finished page.\nIt is the tide's unhurried hand,\n\
             returning, returning,\nsure of the shape it is making.",
            "A poem that reads a long love as the sea's patient revision of the shore.",
        ),
        sample(
            "sample-3",
            "The Clockmaker's Alibi",
            PieceType::Story,
            Genre::Mystery,
            Tone::Suspenseful,
            Length::Medium,
            "Inspector Vail distrusted rooms that ticked. The clockmaker's shop ticked from \
             every wall, hundreds of small brass hearts beating out of step, and somewhere \
             beneath them lay Aldous Finch with a chisel in his chest.\n\n'I was winding \
             the regulator at nine,' said the clockmaker, not looking up from his bench. \
             'You can check it. It keeps perfect time.'\n\nVail checked. The regulator \
             agreed: wound at nine precisely. Every clock in the shop agreed, a choir of \
             witnesses with brass tongues.\n\nIt was the silence that betrayed him. One \
             cabinet clock, the oldest, had stopped at 8:47, its pendulum still. The \
             clockmaker had wound every clock in the shop that night, every clock but the \
             one whose case was wide enough to hide a man waiting.\n\n'Perfect time,' said \
             Vail, opening the cabinet, 'is a thing you only arrange when you know the \
             hour will be questioned.' Inside, on the cabinet floor, lay a second chisel, \
             wrapped in a polishing cloth that had not quite finished drinking the blood.",
            "A detective finds the one stopped clock in a shop of perfect alibis.",
        ),
        sample(
            "sample-4",
            "The Last Broadcast from Meridian Station",
            PieceType::Story,
            Genre::SciFi,
            Tone::Dark,
            Length::Medium,
            "Meridian Station had been transmitting the same message for sixty years: ALL \
             WELL. SEND NO ONE.\n\nKessler docked anyway. Salvage rights meant the station \
             was hers if nobody answered three hails, and nobody had answered in sixty \
             years.\n\nInside, the air was warm. The hydroponics were tended. Someone had \
             set the mess table for forty people, and the food was fresh, and the station \
             held nobody at all.\n\nShe found the crew manifest in the commander's cabin. \
             Forty names, and beside each one, in the commander's neat hand, the same \
             annotation: RETIRED TO THE GARDEN.\n\nThe garden module was the only one she \
             hadn't opened. Through the porthole it looked green and peaceful, forty trees \
             in forty neat rows, each one taller than a person, each one leaning, very \
             slightly, toward the glass as she approached.\n\nHer radio chose that moment \
             to speak, in a voice like leaves: 'All well. Send no one.'\n\nKessler was \
             already running for the airlock when the station, gently, began to close its \
             doors. It had been sixty years. The garden was hungry for new growth.",
            "A salvager boards a station that has spent sixty years warning her away.",
        ),
        sample(
            "sample-5",
            "Instructions for Beginning Again",
            PieceType::Poem,
            Genre::Motivational,
            Tone::Inspirational,
            Length::Short,
            "Start where the wreckage is warmest.\nSalvage nothing but the lesson.\n\n\
             Let the old plan lie where it fell.\nIt was a map of a country\nthat no \
             longer issues visas.\n\nWalk. The road is patient\nand owes you no apology,\n\
             and asks for none of yours.\n\nYou are not behind.\nThere is no schedule.\n\
             There is only the next honest step,\nand the astonishing distance\nit has \
             always been willing to carry you.",
            "A spare set of instructions for starting over without shame.",
        ),
        sample(
            "sample-6",
            "The Winter Violinist",
            PieceType::Story,
            Genre::Romance,
            Tone::Tragic,
            Length::Short,
            "Every December, the violinist played beneath Mara's window, and every \
             December she meant to go down to him. There was always a reason not to: the \
             cold, the hour, the fear that speaking would break whatever spell kept him \
             returning.\n\nThe year she finally went down, snow held the street in \
             silence. A neighbor, shoveling, nodded at the empty corner. 'You just missed \
             him. Moved away, they say. Played here twenty years for some girl who never \
             came down.'\n\nMara stood a long time where the music had been, learning the \
             exact weight of a staircase she had never descended.",
            "A woman waits twenty years too long to answer a serenade.",
        ),
    ]
}

/// The fixed prompt-comparison pair: identical parameters except tone.
pub fn comparison() -> [GenerationResult; 2] {
    [
        sample(
            "comp-1",
            "The Goblin's Tea Party",
            PieceType::Story,
            Genre::Fantasy,
            Tone::Humorous,
            Length::Short,
            "Grizelda the goblin peered from her mushroom cottage. Today was her annual \
             tea party, and no one had arrived. A single tear plopped into a tiny teacup. \
             Suddenly, a gnome peeked out from behind a toadstool. 'Is this the right \
             place for the Frightfully Fancy Tea Social?' he squeaked. Soon, a pixie, a \
             troll, and a grumpy dwarf followed. They'd all gotten lost. Grizelda beamed, \
             pouring moss-green tea. It wasn't about being fancy, she realized, but about \
             the frightfully good friends who showed up.",
            "",
        ),
        sample(
            "comp-2",
            "The Goblin's Lament",
            PieceType::Story,
            Genre::Fantasy,
            Tone::Tragic,
            Length::Short,
            "Grizelda the goblin clutched the invitation, its edges crumpled from her \
             grip. 'Annual Tea Party,' it read in her own spidery script. But the \
             clearing was empty. The wind whispered through the toadstools, a lonely song \
             of forgotten things. She had hoped, this year, someone would remember. She \
             had brewed the finest bog-water tea. But like every year before, she would \
             drink it alone, a solitary queen in a kingdom of silence, her only guest the \
             long shadow of the setting sun.",
            "",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_ids_are_unique() {
        let gallery = gallery();
        let mut ids: Vec<&str> = gallery.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), gallery.len());
    }

    #[test]
    fn test_gallery_samples_are_loadable() {
        for sample in gallery() {
            assert!(sample.metadata.params.is_complete(), "{}", sample.id);
            assert!(!sample.title.is_empty());
            assert!(!sample.content.is_empty());
            assert!(!sample.summary.is_empty());
        }
    }

    #[test]
    fn test_comparison_pair_differs_only_in_tone() {
        let [a, b] = comparison();
        assert_ne!(a.metadata.params.tone, b.metadata.params.tone);

        let mut b_params = b.metadata.params.clone();
        b_params.tone = a.metadata.params.tone;
        assert_eq!(a.metadata.params, b_params);
    }
}
