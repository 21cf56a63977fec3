// Gallery pictures: a thumbnail and a full-size rendering of each.

pub(crate) struct Picture {
    pub(crate) caption: &'static str,
    pub(crate) thumb: &'static [&'static str],
    pub(crate) full: &'static [&'static str],
}

pub(crate) const PICTURES: [Picture; 6] = [
    Picture {
        caption: "The first hello",
        thumb: &[
            r"  .--.  .--.  ",
            r" (    \/    ) ",
            r"  \  hi!   /  ",
            r"   '.    .'   ",
            r"     '..'     ",
        ],
        full: &[
            r"      .-----.          .-----.      ",
            r"    .'       '.      .'       '.    ",
            r"   /           \    /           \   ",
            r"  |             '--'             |  ",
            r"  |          h e l l o !          |  ",
            r"   \                             /   ",
            r"    '.                         .'    ",
            r"      '.                     .'      ",
            r"        '.                 .'        ",
            r"          '.             .'          ",
            r"            '.         .'            ",
            r"              '-.___.-'              ",
        ],
    },
    Picture {
        caption: "Late night talks",
        thumb: &[
            r"   *    .  *  ",
            r"  .   _..     ",
            r"    .' .'  *  ",
            r"  * |  |    . ",
            r"     '._'.    ",
        ],
        full: &[
            r"   *        .          *        .    ",
            r"        .        _..-''-.      *     ",
            r"  .           .-'  .-'''         .   ",
            r"      *     .'   .'        *         ",
            r"           /    /               .    ",
            r"   .      |    |      *              ",
            r"          |    |            .     *  ",
            r"     *     \    \                    ",
            r"            '.   '.     .       *    ",
            r"   .          '-.  '-...-'           ",
            r"        *        ''-....-'    .      ",
            r"              .          *           ",
        ],
    },
    Picture {
        caption: "Coffee for two",
        thumb: &[
            r"   ( (  ) )   ",
            r"   .______.   ",
            r"   |      |]  ",
            r"   \      /   ",
            r"    '----'    ",
        ],
        full: &[
            r"            (  (   )  )              ",
            r"             )  ) (  (               ",
            r"            (  (   )  )              ",
            r"         .________________.          ",
            r"         |                |___       ",
            r"         |    you  +  me  |   \      ",
            r"         |                |    |     ",
            r"         |                |___/      ",
            r"          \              /           ",
            r"           \            /            ",
            r"         ___'----------'___          ",
            r"        '------------------'         ",
        ],
    },
    Picture {
        caption: "That sunset walk",
        thumb: &[
            r"    \ | /     ",
            r"  -- (_) --   ",
            r"  ~~~~~~~~~~  ",
            r"   ~~~~~~~~   ",
            r"  o/     \o   ",
        ],
        full: &[
            r"                \   |   /            ",
            r"             .   \  |  /   .         ",
            r"          '.   .-'''''''-.   .'      ",
            r"        -- -- (           ) -- --    ",
            r"  ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~ ",
            r"    ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~   ",
            r"       ~~~~~~~~~~~~~~~~~~~~~~~~      ",
            r"                                     ",
            r"            o           o            ",
            r"           /|\__     __/|\           ",
            r"           / \    ♥    / \           ",
            r"  _________________________________  ",
        ],
    },
    Picture {
        caption: "Flowers, just because",
        thumb: &[
            r"   @  @  @    ",
            r"   \\ | //    ",
            r"    \\|//     ",
            r"    _\|/_     ",
            r"   (_____)    ",
        ],
        full: &[
            r"        @@@      @@@      @@@        ",
            r"       @@@@@    @@@@@    @@@@@       ",
            r"        @@@  @@@ @@@ @@@  @@@        ",
            r"         \  @@@@@ | @@@@@  /         ",
            r"          \  @@@  |  @@@  /          ",
            r"           \   \  |  /   /           ",
            r"            \   \ | /   /            ",
            r"             '.__\|/__.'             ",
            r"              |  ___  |              ",
            r"              | (_♥_) |              ",
            r"              |_______|              ",
            r"                                     ",
        ],
    },
    Picture {
        caption: "Every day after",
        thumb: &[
            r"   _________  ",
            r"  |  ♥   ♥  | ",
            r"  |    ♥    | ",
            r"  |  ♥   ♥  | ",
            r"  |_________| ",
        ],
        full: &[
            r"   _______________________________   ",
            r"  |  MON  TUE  WED  THU  FRI  SAT  |  ",
            r"  |--------------------------------|  ",
            r"  |   ♥    ♥    ♥    ♥    ♥    ♥   |  ",
            r"  |                                |  ",
            r"  |   ♥    ♥    ♥    ♥    ♥    ♥   |  ",
            r"  |                                |  ",
            r"  |   ♥    ♥    ♥    ♥    ♥    ♥   |  ",
            r"  |                                |  ",
            r"  |   ♥    ♥    ♥    ♥    ♥    ♥   |  ",
            r"  |________________________________|  ",
            r"                                     ",
        ],
    },
];

pub(crate) fn picture(index: usize) -> Option<&'static Picture> {
    PICTURES.get(index)
}
