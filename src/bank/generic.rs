//! Domain-neutral templates. Every other domain falls back here.

use super::{Band, McTemplate, MsTemplate, TfTemplate};

const TF: &[TfTemplate] = &[
  tf!("El conocimiento de {topic} es aplicable en situaciones de la vida real.", true),
  tf!("{Topic} es un concepto que no tiene relación con otras áreas del conocimiento.", false),
  tf!("Comprender {topic} requiere práctica y estudio constante.", true),
  tf!("{Topic} puede ser entendido de una sola manera, sin interpretaciones.", false),
  tf!("El aprendizaje de {topic} contribuye al desarrollo del pensamiento crítico.", true),
  tf!("{Topic} es un tema que solo se estudia en el colegio.", false),
  tf!("Existen diferentes formas de aplicar los conceptos de {topic}.", true),
  tf!("El dominio de {topic} se logra únicamente memorizando definiciones.", false),
  tf!("Los conceptos de {topic} son fundamentales para el aprendizaje.", true, "Los conceptos básicos siempre son esenciales."),
  tf!("{Topic} no tiene relación con otras áreas del conocimiento.", false, "Todos los temas están interrelacionados."),
  tf!("El estudio de {topic} requiere práctica constante.", true, "La práctica refuerza el aprendizaje."),
  tf!("Es posible aplicar lo aprendido sobre {topic} en situaciones cotidianas.", true,
    "El aprendizaje cobra sentido cuando se aplica."),
  tf!("Para comprender {topic} basta con memorizar sin entender.", false,
    "La comprensión requiere relacionar y aplicar los conceptos."),
  tf!("Hacer preguntas sobre {topic} ayuda a profundizar el aprendizaje.", true,
    "Preguntar permite aclarar dudas y ampliar lo aprendido."),
  tf!("{Topic} se puede estudiar sin leer ni practicar.", false, "La lectura y la práctica son la base del estudio."),
  tf!("Trabajar en equipo puede facilitar el estudio de {topic}.", true,
    "Compartir ideas con otros enriquece la comprensión."),
];

const MC: &[McTemplate] = &[
  mc!("¿Por qué es importante aprender sobre {topic}?",
    ["Solo para las notas", "Para el desarrollo personal", "No es importante", "Solo para el examen"], 1),
  mc!("¿Cuál es la mejor forma de estudiar {topic}?",
    ["Memorizar todo", "Comprender y practicar", "Solo leer una vez", "Copiar las respuestas"], 1),
  mc!("¿Cómo podemos aplicar {topic} en la vida real?",
    ["No se puede aplicar", "En diversas situaciones", "Solo en el trabajo", "Nunca se usa"], 1),
  mc!("¿Qué habilidad desarrollamos al estudiar {topic}?", ["Ninguna", "Pensamiento crítico", "Solo memoria", "Nada útil"], 1),
  mc!("¿Qué es fundamental para comprender {topic}?",
    ["Conocer los conceptos básicos", "Memorizar sin entender", "Ignorar los detalles", "Saltarse los ejercicios"], 0),
  mc!("¿Cómo se aprende mejor {topic}?", ["Solo leyendo una vez", "Con práctica y estudio", "Sin hacer ejercicios", "Memorizando fechas"], 1),
  mc!("¿Qué hacer si tienes una duda sobre {topic}?",
    ["Ignorarla", "Esperar a la prueba", "Preguntar al profesor o investigar", "Copiar la respuesta"], 2),
  mc!("¿Cuál es una buena forma de repasar {topic}?",
    ["No repasar nunca", "Estudiar solo la noche anterior", "Leer únicamente los títulos", "Hacer un resumen con las ideas principales"], 3),
];

const MS: &[MsTemplate] = &[
  ms!("Selecciona todas las afirmaciones correctas sobre {topic}:", [
    "Es importante para el aprendizaje" => true,
    "Se puede aplicar en la vida real" => true,
    "No tiene ninguna utilidad práctica" => false,
    "Solo sirve para aprobar exámenes" => false,
  ]),
  ms!("¿Cuáles son características del estudio de {topic}?", [
    "Requiere práctica constante" => true,
    "Se aprende de un día para otro" => false,
    "Desarrolla habilidades de pensamiento" => true,
    "Es completamente innecesario" => false,
  ]),
  ms!("Marca las opciones que describen correctamente {topic}:", [
    "Tiene aplicación en diferentes contextos" => true,
    "Es un tema aislado sin conexiones" => false,
    "Contribuye a la formación integral" => true,
    "Solo interesa a los expertos" => false,
  ]),
  ms!("¿Cuáles son buenas prácticas para estudiar {topic}?",
    ["Tomar notas" => true, "No preguntar dudas" => false, "Hacer ejercicios" => true, "Evitar la lectura" => false]),
  ms!("¿Qué recursos pueden ayudarte a aprender sobre {topic}?",
    ["Libros de texto" => true, "Videos educativos" => true, "Rumores sin fuente" => false, "Guías de ejercicios" => true]),
  ms!("¿Qué actitudes favorecen el aprendizaje de {topic}?",
    ["Curiosidad" => true, "Desinterés" => false, "Perseverancia" => true, "Distracción constante" => false]),
];

pub static BANDS: &[Band] = &[Band { min: 1, max: 5, tf: TF, mc: MC, ms: MS }];

const TF_EN: &[TfTemplate] = &[
  tf!("Knowledge of {topic} can be applied in real-life situations.", true),
  tf!("{Topic} is a concept with no connection to other areas of knowledge.", false),
  tf!("Understanding {topic} requires practice and steady study.", true),
  tf!("{Topic} can only be understood in one way, with no room for interpretation.", false),
  tf!("Learning about {topic} helps develop critical thinking.", true),
  tf!("{Topic} is a subject that is only studied at school.", false),
  tf!("There are different ways to apply the concepts of {topic}.", true),
  tf!("Mastering {topic} is achieved only by memorizing definitions.", false),
  tf!("Asking questions about {topic} helps deepen learning.", true,
    "Questions clear up doubts and extend what has been learned."),
  tf!("Working in a team can make studying {topic} easier.", true,
    "Sharing ideas with others enriches understanding."),
];

const MC_EN: &[McTemplate] = &[
  mc!("Why is it important to learn about {topic}?",
    ["Only for grades", "For personal development", "It is not important", "Only for the test"], 1),
  mc!("What is the best way to study {topic}?",
    ["Memorize everything", "Understand and practice", "Read it only once", "Copy the answers"], 1),
  mc!("How can we apply {topic} in real life?",
    ["It cannot be applied", "In many different situations", "Only at work", "It is never used"], 1),
  mc!("Which skill do we develop by studying {topic}?", ["None", "Critical thinking", "Only memory", "Nothing useful"], 1),
  mc!("What should you do if you have a question about {topic}?",
    ["Ignore it", "Wait for the test", "Ask the teacher or look it up", "Copy someone's answer"], 2),
  mc!("What is a good way to review {topic}?",
    ["Never review", "Study only the night before", "Read only the headings", "Write a summary of the main ideas"], 3),
];

const MS_EN: &[MsTemplate] = &[
  ms!("Select all the correct statements about {topic}:", [
    "It is important for learning" => true,
    "It can be applied in real life" => true,
    "It has no practical use at all" => false,
    "It is only useful for passing tests" => false,
  ]),
  ms!("Which of these describe studying {topic}?", [
    "It takes steady practice" => true,
    "It can be learned overnight" => false,
    "It builds thinking skills" => true,
    "It is completely unnecessary" => false,
  ]),
  ms!("Mark the options that correctly describe {topic}:", [
    "It applies in different contexts" => true,
    "It is an isolated subject with no connections" => false,
    "It contributes to well-rounded learning" => true,
    "Only experts care about it" => false,
  ]),
  ms!("Which resources can help you learn about {topic}?",
    ["Textbooks" => true, "Educational videos" => true, "Unsourced rumors" => false, "Practice worksheets" => true]),
  ms!("What are good habits for studying {topic}?",
    ["Taking notes" => true, "Never asking questions" => false, "Doing exercises" => true, "Avoiding reading" => false]),
  ms!("Which attitudes help when learning {topic}?",
    ["Curiosity" => true, "Lack of interest" => false, "Perseverance" => true, "Constant distraction" => false]),
];

pub static BANDS_EN: &[Band] = &[Band { min: 1, max: 5, tf: TF_EN, mc: MC_EN, ms: MS_EN }];
