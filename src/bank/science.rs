//! Natural-science templates: topic packs for well-known units, then
//! `{topic}` templates that fit any science topic.

use super::{Band, McTemplate, MsTemplate, TfTemplate, TopicPack};

const TF_RESPIRATORY: &[TfTemplate] = &[
  tf!("Los pulmones son los órganos principales del sistema respiratorio.", true,
    "Los pulmones son donde ocurre el intercambio gaseoso."),
  tf!("El estómago es parte del sistema respiratorio.", false, "El estómago pertenece al sistema digestivo."),
  tf!("La tráquea conduce el aire hacia los bronquios.", true, "La tráquea es el conducto principal de aire."),
  tf!("El corazón realiza la respiración pulmonar.", false, "El corazón pertenece al sistema circulatorio."),
  tf!("Los alvéolos son donde ocurre el intercambio de gases.", true, "En los alvéolos se intercambia oxígeno por CO₂."),
  tf!("Al exhalar expulsamos principalmente dióxido de carbono.", true,
    "El aire espirado lleva el CO₂ producido por las células."),
  tf!("El diafragma se relaja durante la inspiración.", false, "Durante la inspiración el diafragma se contrae y desciende."),
];

const MC_RESPIRATORY: &[McTemplate] = &[
  mc!("¿Cuál es la función principal de los pulmones?",
    ["Realizar el intercambio gaseoso", "Bombear sangre", "Digerir alimentos", "Filtrar toxinas"], 0),
  mc!("¿Qué músculo permite la respiración?", ["Bíceps", "Diafragma", "Corazón", "Esófago"], 1),
  mc!("¿Dónde se encuentran los alvéolos?", ["En el corazón", "En los riñones", "En los pulmones", "En el hígado"], 2),
  mc!("¿Qué gas absorbemos al respirar?", ["Dióxido de carbono", "Nitrógeno", "Metano", "Oxígeno"], 3),
  mc!("¿Cuál estructura contiene las cuerdas vocales?", ["Laringe", "Tráquea", "Bronquios", "Nariz"], 0),
  mc!("¿Por dónde entra normalmente el aire al cuerpo?", ["Por el esófago", "Por las fosas nasales", "Por los oídos", "Por la piel"], 1),
  mc!("¿Qué estructura evita que los alimentos entren a la tráquea?", ["La úvula", "La lengua", "La epiglotis", "El paladar"], 2),
  mc!("¿En qué se dividen los bronquios dentro de los pulmones?", ["Venas", "Arterias", "Nervios", "Bronquiolos"], 3),
  mc!("¿Qué gas eliminamos al exhalar?", ["Dióxido de carbono", "Oxígeno", "Hidrógeno", "Helio"], 0),
  mc!("¿Qué sistema transporta el oxígeno desde los pulmones a las células?",
    ["Sistema digestivo", "Sistema circulatorio", "Sistema nervioso", "Sistema óseo"], 1),
];

const MS_RESPIRATORY: &[MsTemplate] = &[
  ms!("¿Cuáles son órganos del sistema respiratorio?", ["Pulmones" => true, "Estómago" => false, "Tráquea" => true, "Riñones" => false]),
  ms!("¿Qué ocurre durante la inspiración?",
    ["El diafragma se contrae" => true, "Entra aire rico en oxígeno" => true, "Se expulsa CO₂" => false, "El corazón se detiene" => false]),
  ms!("¿Cuáles son funciones de las fosas nasales?",
    ["Filtrar el aire" => true, "Bombear sangre" => false, "Calentar el aire" => true, "Digerir nutrientes" => false]),
  ms!("¿Cuáles estructuras forman las vías respiratorias?",
    ["Faringe" => true, "Laringe" => true, "Esófago" => false, "Bronquios" => true]),
  ms!("¿Qué hábitos cuidan el sistema respiratorio?",
    ["Hacer ejercicio al aire libre" => true, "Fumar" => false, "Ventilar los espacios cerrados" => true, "Respirar humo de leña" => false]),
  ms!("¿Qué ocurre durante la espiración?",
    ["El diafragma se relaja" => true, "Sale aire con dióxido de carbono" => true, "Los pulmones se expanden" => false, "Entra oxígeno a los alvéolos" => false]),
];

const TF_CELL: &[TfTemplate] = &[
  tf!("El núcleo contiene el material genético de la célula.", true, "El ADN se encuentra en el núcleo."),
  tf!("Las mitocondrias son exclusivas de las células vegetales.", false,
    "Las mitocondrias están en células animales y vegetales."),
  tf!("La membrana celular controla qué entra y sale de la célula.", true, "La membrana es selectivamente permeable."),
  tf!("Las bacterias tienen núcleo definido.", false, "Las bacterias son procariotas, sin núcleo definido."),
  tf!("Los cloroplastos realizan la fotosíntesis.", true, "Los cloroplastos contienen clorofila."),
];

const MC_CELL: &[McTemplate] = &[
  mc!("¿Cuál organelo produce energía en la célula?", ["Ribosomas", "Mitocondrias", "Vacuola", "Pared celular"], 1),
  mc!("¿Dónde se encuentra el ADN en células eucariotas?", ["En el núcleo", "En el citoplasma", "En la membrana", "En los ribosomas"], 0),
  mc!("¿Qué organelo es exclusivo de células vegetales?", ["Mitocondria", "Ribosoma", "Cloroplasto", "Núcleo"], 2),
  mc!("¿Cuál es la función de los ribosomas?", ["Producir energía", "Almacenar agua", "Controlar la célula", "Sintetizar proteínas"], 3),
  mc!("¿Qué tipo de célula tiene pared celular?", ["Célula vegetal", "Célula animal", "Glóbulo rojo", "Neurona"], 0),
];

const MS_CELL: &[MsTemplate] = &[
  ms!("¿Cuáles son organelos de la célula?", ["Núcleo" => true, "Huesos" => false, "Mitocondrias" => true, "Piel" => false]),
  ms!("¿Qué estructuras tienen las células vegetales?",
    ["Pared celular" => true, "Cilios" => false, "Cloroplastos" => true, "Flagelos" => false]),
  ms!("¿Cuáles son funciones de la membrana celular?",
    ["Proteger la célula" => true, "Producir energía" => false, "Regular el paso de sustancias" => true, "Sintetizar ADN" => false]),
];

const TF_PHOTOSYNTHESIS: &[TfTemplate] = &[
  tf!("La fotosíntesis produce oxígeno como producto.", true, "El O₂ es un subproducto de la fotosíntesis."),
  tf!("La fotosíntesis ocurre en las mitocondrias.", false, "La fotosíntesis ocurre en los cloroplastos."),
  tf!("Las plantas necesitan luz solar para la fotosíntesis.", true, "La luz es esencial para la fase luminosa."),
  tf!("Los animales realizan fotosíntesis.", false, "Solo las plantas, algas y algunas bacterias."),
  tf!("La clorofila es el pigmento que captura la luz.", true, "La clorofila da el color verde a las plantas."),
];

const MC_PHOTOSYNTHESIS: &[McTemplate] = &[
  mc!("¿Dónde ocurre la fotosíntesis?", ["En los cloroplastos", "En las mitocondrias", "En el núcleo", "En la vacuola"], 0),
  mc!("¿Qué gas absorben las plantas durante la fotosíntesis?", ["Oxígeno", "Dióxido de carbono", "Nitrógeno", "Metano"], 1),
  mc!("¿Cuál es el producto principal de la fotosíntesis?", ["Proteínas", "Lípidos", "Glucosa", "Vitaminas"], 2),
  mc!("¿Por qué poros intercambian gases las hojas?", ["Tricomas", "Cutícula", "Epidermis", "Estomas"], 3),
  mc!("¿Qué pigmento es responsable del color verde?", ["Clorofila", "Caroteno", "Xantofila", "Antocianina"], 0),
];

const MS_PHOTOSYNTHESIS: &[MsTemplate] = &[
  ms!("¿Qué elementos necesita la fotosíntesis?",
    ["Luz solar" => true, "Oxígeno" => false, "Dióxido de carbono" => true, "Proteínas" => false]),
  ms!("¿Cuáles son productos de la fotosíntesis?",
    ["Glucosa" => true, "Dióxido de carbono" => false, "Oxígeno" => true, "Nitrógeno" => false]),
  ms!("¿Dónde están los cloroplastos?",
    ["En las hojas" => true, "En las raíces" => false, "En los tallos verdes" => true, "En las flores rojas" => false]),
];

pub static PACKS: &[TopicPack] = &[
  TopicPack { keywords: &["respirat", "pulmon"], tf: TF_RESPIRATORY, mc: MC_RESPIRATORY, ms: MS_RESPIRATORY },
  TopicPack { keywords: &["celula", "organelo"], tf: TF_CELL, mc: MC_CELL, ms: MS_CELL },
  TopicPack { keywords: &["fotosintesis"], tf: TF_PHOTOSYNTHESIS, mc: MC_PHOTOSYNTHESIS, ms: MS_PHOTOSYNTHESIS },
];

const TF_GENERAL: &[TfTemplate] = &[
  tf!("{Topic} es un proceso fundamental que ocurre en todos los seres vivos.", true),
  tf!("Los cambios en {topic} pueden afectar a otros sistemas relacionados.", true),
  tf!("{Topic} solo puede observarse en condiciones de laboratorio.", false),
  tf!("El estudio de {topic} ayuda a comprender mejor nuestro entorno.", true),
  tf!("{Topic} es un fenómeno que no tiene relación con la vida cotidiana.", false),
  tf!("Los científicos utilizan el método científico para estudiar {topic}.", true),
  tf!("{Topic} es un proceso que permanece siempre constante.", false),
  tf!("Comprender {topic} es importante para el cuidado del medio ambiente.", true),
  tf!("El estudio de {topic} se basa en la observación y la experimentación.", true,
    "Las ciencias naturales construyen conocimiento a partir de evidencia."),
  tf!("{Topic} no tiene ninguna relación con los seres vivos ni con el ambiente.", false,
    "Los fenómenos naturales se relacionan con los seres vivos y su entorno."),
  tf!("Para investigar {topic} se puede formular una hipótesis y ponerla a prueba.", true,
    "El método científico parte de una hipótesis que se verifica."),
  tf!("Los resultados de un experimento sobre {topic} nunca deben registrarse.", false,
    "Registrar datos permite comparar y comunicar resultados."),
  tf!("Comprender {topic} nos ayuda a explicar fenómenos de la vida cotidiana.", true,
    "La ciencia explica lo que observamos a diario."),
  tf!("En ciencias, una sola observación basta para sacar conclusiones definitivas sobre {topic}.", false,
    "Las conclusiones requieren repetir observaciones y experimentos."),
  tf!("Los modelos y diagramas sirven para representar {topic}.", true,
    "Los modelos simplifican fenómenos complejos para estudiarlos."),
  tf!("El conocimiento científico sobre {topic} puede cambiar con nueva evidencia.", true,
    "La ciencia se corrige a medida que aparecen nuevos datos."),
];

const MC_GENERAL: &[McTemplate] = &[
  mc!("¿Cuál es la importancia principal de estudiar {topic}?",
    ["No tiene importancia", "Solo para aprobar exámenes", "Comprender nuestro entorno", "Es obligatorio"], 2),
  mc!("¿Qué método utilizan los científicos para estudiar {topic}?",
    ["Adivinación", "Método científico", "Opiniones personales", "Tradición oral"], 1),
  mc!("¿Cómo se relaciona {topic} con la vida cotidiana?",
    ["No se relaciona", "Solo en el laboratorio", "En múltiples aspectos diarios", "Solo en la escuela"], 2),
  mc!("¿Qué actitud es más apropiada al estudiar {topic}?",
    ["Memorizar sin entender", "Curiosidad y observación", "Solo leer el libro", "No hacer preguntas"], 1),
  mc!("¿Cuál es el primer paso para investigar {topic}?",
    ["Observar y hacer preguntas", "Publicar la conclusión", "Ignorar los datos", "Adivinar el resultado"], 0),
  mc!("¿Qué instrumento se usa para registrar datos al estudiar {topic}?",
    ["Un cuento", "Una tabla de datos", "Un poema", "Una canción"], 1),
  mc!("Al estudiar {topic}, ¿qué es una hipótesis?",
    ["Una conclusión final", "Un resultado medido", "Una posible explicación que se puede comprobar", "Una opinión sin fundamento"], 2),
  mc!("¿Por qué es importante repetir un experimento sobre {topic}?",
    ["Para gastar más materiales", "Para cambiar la pregunta", "Para evitar registrar datos", "Para confirmar que los resultados son confiables"], 3),
];

pub static BANDS: &[Band] = &[Band { min: 1, max: 5, tf: TF_GENERAL, mc: MC_GENERAL, ms: &[] }];

// Topic packs are matched on Spanish keywords and stay out of English pools.
const TF_EN: &[TfTemplate] = &[
  tf!("{Topic} is a fundamental process that takes place in living things.", true),
  tf!("Changes in {topic} can affect other related systems.", true),
  tf!("{Topic} can only be observed under laboratory conditions.", false),
  tf!("Studying {topic} helps us better understand our surroundings.", true),
  tf!("{Topic} has nothing to do with everyday life.", false),
  tf!("Scientists use the scientific method to study {topic}.", true),
  tf!("{Topic} never changes over time.", false),
  tf!("Understanding {topic} matters for caring for the environment.", true),
  tf!("To investigate {topic} you can state a hypothesis and test it.", true,
    "The scientific method starts from a hypothesis that is then checked."),
  tf!("Scientific knowledge about {topic} can change with new evidence.", true,
    "Science corrects itself as new data appear."),
];

const MC_EN: &[McTemplate] = &[
  mc!("What is the main reason to study {topic}?",
    ["It has no importance", "Only to pass tests", "To understand our surroundings", "Because it is mandatory"], 2),
  mc!("Which method do scientists use to study {topic}?",
    ["Guessing", "The scientific method", "Personal opinions", "Oral tradition"], 1),
  mc!("How is {topic} related to everyday life?",
    ["It is not related", "Only in the laboratory", "In many daily situations", "Only at school"], 2),
  mc!("Which attitude fits best when studying {topic}?",
    ["Memorizing without understanding", "Curiosity and observation", "Only reading the book", "Never asking questions"], 1),
  mc!("When studying {topic}, what is a hypothesis?",
    ["A final conclusion", "A measured result", "A possible explanation that can be tested", "An unfounded opinion"], 2),
  mc!("Why repeat an experiment about {topic}?",
    ["To use more materials", "To change the question", "To avoid recording data", "To confirm the results are reliable"], 3),
];

pub static BANDS_EN: &[Band] = &[Band { min: 1, max: 5, tf: TF_EN, mc: MC_EN, ms: &[] }];
